use std::path::PathBuf;

use ormpack_core::channel::Channel;
use ormpack_core::io::image_io::OutputFormat;
use ormpack_core::job::{ChannelMap, JobConfig, JobStage};

#[test]
fn test_channel_map_default() {
    let map = ChannelMap::default();
    assert_eq!(map.smoothness, Channel::A);
    assert_eq!(map.ao, Channel::A);
    assert_eq!(map.metallic, Channel::B);
}

#[test]
fn test_job_stage_display() {
    assert_eq!(format!("{}", JobStage::Scanning), "Scanning inputs");
    assert_eq!(format!("{}", JobStage::Converting), "Converting pairs");
}

#[test]
fn test_job_config_toml_roundtrip() {
    let config = JobConfig {
        input: PathBuf::from("textures"),
        output: PathBuf::from("converted"),
        invert_smoothness: false,
        drop_orm_alpha: false,
        channels: ChannelMap {
            smoothness: Channel::R,
            ao: Channel::G,
            metallic: Channel::A,
        },
        save: ormpack_core::io::image_io::SaveOptions {
            format: OutputFormat::Tga,
            tga_rle: false,
        },
    };

    let toml_str = toml::to_string_pretty(&config).unwrap();
    let parsed: JobConfig = toml::from_str(&toml_str).unwrap();

    assert_eq!(parsed.input, config.input);
    assert_eq!(parsed.output, config.output);
    assert!(!parsed.invert_smoothness);
    assert!(!parsed.drop_orm_alpha);
    assert_eq!(parsed.channels.smoothness, Channel::R);
    assert_eq!(parsed.channels.ao, Channel::G);
    assert_eq!(parsed.channels.metallic, Channel::A);
    assert_eq!(parsed.save.format, OutputFormat::Tga);
    assert!(!parsed.save.tga_rle);
}

#[test]
fn test_job_config_minimal_toml_uses_defaults() {
    let parsed: JobConfig = toml::from_str(
        r#"
input = "in"
output = "out"
"#,
    )
    .unwrap();

    assert!(parsed.invert_smoothness);
    assert!(parsed.drop_orm_alpha);
    assert_eq!(parsed.channels.smoothness, Channel::A);
    assert_eq!(parsed.channels.metallic, Channel::B);
    assert_eq!(parsed.save.format, OutputFormat::Png);
    assert!(parsed.save.tga_rle);
}
