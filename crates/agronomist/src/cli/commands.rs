//! CLI argument definitions.

use agronomist::Language;
use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Plant disease analysis and crop recommendation.
#[derive(Parser, Debug)]
#[command(name = "agronomist")]
#[command(version, about)]
pub struct Cli {
    /// Path to a TOML configuration file (default: ./agronomist.toml if present)
    #[arg(short, long, global = true, env = "AGRONOMIST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a plant photo for disease
    Disease(DiseaseArgs),
    /// Recommend crops for a soil profile
    Crop(CropArgs),
    /// Run the HTTP front-end
    Serve(ServeArgs),
}

/// Arguments for `disease`.
#[derive(Args, Debug)]
pub struct DiseaseArgs {
    /// Plant image (jpg, jpeg or png)
    #[arg(short, long)]
    pub image: PathBuf,

    /// Response language
    #[arg(short, long, default_value_t = Language::English)]
    pub language: Language,

    /// Area or village, e.g. Kuttanad
    #[arg(long, default_value = "")]
    pub area: String,

    /// District, e.g. Alappuzha
    #[arg(long, default_value = "")]
    pub district: String,

    /// State, e.g. Kerala
    #[arg(long, default_value = "")]
    pub state: String,

    /// Directory the upload is staged in
    #[arg(long, default_value = ".")]
    pub upload_dir: PathBuf,
}

/// Arguments for `crop`.
#[derive(Args, Debug)]
pub struct CropArgs {
    /// Soil type, e.g. Loamy
    #[arg(long)]
    pub soil_type: String,

    /// pH level, e.g. 6.5
    #[arg(long)]
    pub ph: String,

    /// Nutrient content, e.g. "High N, Low P"
    #[arg(long)]
    pub nutrients: String,

    /// Soil texture, e.g. "60% sand, 30% silt"
    #[arg(long)]
    pub texture: String,

    /// Location, e.g. "Kerala, India"
    #[arg(long)]
    pub location: String,
}

/// Arguments for `serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:8080", env = "AGRONOMIST_BIND")]
    pub bind: SocketAddr,

    /// Directory uploads are staged in
    #[arg(long, default_value = ".")]
    pub upload_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disease_args_parse() {
        let cli = Cli::try_parse_from([
            "agronomist",
            "disease",
            "--image",
            "leaf.jpg",
            "--language",
            "hindi",
            "--district",
            "Alappuzha",
        ])
        .unwrap();

        match cli.command {
            Commands::Disease(args) => {
                assert_eq!(args.language, Language::Hindi);
                assert_eq!(args.district, "Alappuzha");
                assert_eq!(args.area, "");
                assert_eq!(args.upload_dir, PathBuf::from("."));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_crop_args_require_all_fields() {
        assert!(Cli::try_parse_from(["agronomist", "crop", "--soil-type", "Loamy"]).is_err());
    }
}
