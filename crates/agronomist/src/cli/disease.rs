//! Disease command handler.

use super::DiseaseArgs;
use agronomist::{
    Advisor, AgronomistError, AgronomistResult, LocationContext, NotFoundError, UploadError,
    UploadErrorKind,
};

/// Handles the `disease` command: stage the image, run both calls, print.
#[tracing::instrument(skip_all, fields(image = %args.image.display(), language = %args.language))]
pub async fn handle_disease_command(advisor: &Advisor, args: DiseaseArgs) -> AgronomistResult<()> {
    let bytes = tokio::fs::read(&args.image)
        .await
        .map_err(|e| -> AgronomistError {
            match e.kind() {
                std::io::ErrorKind::NotFound => NotFoundError::new(&args.image).into(),
                _ => UploadError::new(UploadErrorKind::Io(e.to_string())).into(),
            }
        })?;

    let file_name = args
        .image
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            UploadError::new(UploadErrorKind::InvalidFilename(
                args.image.display().to_string(),
            ))
        })?;

    let location = LocationContext::new(args.area, args.district, args.state);
    let report = advisor
        .analyze_disease(file_name, &bytes, args.language, &location)
        .await?;

    println!("Disease Analysis\n================\n{}\n", report.analysis());
    println!(
        "Regional Disease Insights\n=========================\n{}",
        report.regional_insights()
    );
    Ok(())
}
