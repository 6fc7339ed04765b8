use student::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    student::app::run().await
}
