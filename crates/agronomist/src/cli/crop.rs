//! Crop command handler.

use super::CropArgs;
use agronomist::{Advisor, AgronomistResult, ConfigError, ConfigErrorKind, SoilProfile};

/// Handles the `crop` command.
#[tracing::instrument(skip_all)]
pub async fn handle_crop_command(advisor: &Advisor, args: CropArgs) -> AgronomistResult<()> {
    let soil = SoilProfile::builder()
        .soil_type(args.soil_type)
        .ph_level(args.ph)
        .nutrients(args.nutrients)
        .texture(args.texture)
        .location(args.location)
        .build()
        .map_err(|e| ConfigError::new(ConfigErrorKind::Invalid(e.to_string())))?;

    let suggestions = advisor.suggest_crops(&soil).await?;
    println!("Crop Recommendations\n====================\n{}", suggestions);
    Ok(())
}
