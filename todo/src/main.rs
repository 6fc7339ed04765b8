use todo::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    todo::app::run().await
}
