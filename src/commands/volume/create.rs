use anyhow::Result;
use clap::{ArgGroup, Parser};

use super::types::{Volume, VolumeProperties};
use super::utils::{create_volume, parse_volume_size, read_ssh_keys, volume_path};
use crate::state::State;
use crate::utils::wait::WaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Create a volume")]
#[clap(group(
    ArgGroup::new("source")
        .required(true)
        .args(["image_id", "image_alias", "licence_type"])
))]
pub struct Options {
    #[clap(long = "datacenter-id", help = "ID of the datacenter")]
    pub datacenter_id: String,

    #[clap(long = "name", help = "Name of the volume")]
    pub name: Option<String>,

    #[clap(
        long = "size",
        help = "Size of the volume, e.g. 20GB. Plain numbers are gigabytes",
        value_parser = parse_volume_size,
        default_value = "10"
    )]
    pub size: f64,

    #[clap(
        long = "type",
        help = "Type of storage",
        value_parser = ["HDD", "SSD", "SSD Standard", "SSD Premium"],
        default_value = "HDD"
    )]
    pub volume_type: String,

    #[clap(long = "image-id", help = "ID of the image to create the volume from")]
    pub image_id: Option<String>,

    #[clap(long = "image-alias", help = "Alias of the image, e.g. ubuntu:latest")]
    pub image_alias: Option<String>,

    #[clap(
        long = "licence-type",
        help = "Licence type of an empty volume",
        value_parser = ["LINUX", "WINDOWS", "WINDOWS2016", "UNKNOWN", "OTHER"]
    )]
    pub licence_type: Option<String>,

    #[clap(long = "image-password", help = "Root password set on a public image")]
    pub image_password: Option<String>,

    #[clap(
        long = "ssh-key-paths",
        help = "Public SSH key files injected into a public image",
        value_delimiter = ','
    )]
    pub ssh_key_paths: Vec<String>,

    #[clap(
        long = "availability-zone",
        help = "Availability zone of the volume",
        value_parser = ["AUTO", "ZONE_1", "ZONE_2", "ZONE_3"],
        default_value = "AUTO"
    )]
    pub availability_zone: String,

    #[clap(
        long = "bus",
        help = "Bus the volume is attached with",
        value_parser = ["VIRTIO", "IDE"],
        default_value = "VIRTIO"
    )]
    pub bus: String,

    #[clap(flatten)]
    pub wait: WaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Volume>()?;

    let ssh_keys = if options.ssh_key_paths.is_empty() {
        None
    } else {
        Some(read_ssh_keys(&options.ssh_key_paths).await?)
    };

    let properties = VolumeProperties {
        name: options.name,
        volume_type: Some(options.volume_type),
        size: Some(options.size),
        availability_zone: Some(options.availability_zone),
        image: options.image_id,
        image_alias: options.image_alias,
        image_password: options.image_password,
        ssh_keys,
        bus: Some(options.bus),
        licence_type: options.licence_type,
        ..Default::default()
    };

    let (volume, request) = create_volume(&state.http, &options.datacenter_id, properties).await?;

    options
        .wait
        .wait(
            &state.http,
            request.as_deref(),
            &volume_path(&options.datacenter_id, &volume.id),
        )
        .await?;

    log::info!("Created volume `{}`", volume.id);

    output.print_one(&volume)
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Wrapper {
        #[clap(flatten)]
        options: Options,
    }

    #[test]
    fn test_requires_a_source() {
        let err = Wrapper::try_parse_from(["create", "--datacenter-id", "dc"]).unwrap_err();

        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_sources_are_exclusive() {
        let err = Wrapper::try_parse_from([
            "create",
            "--datacenter-id",
            "dc",
            "--image-alias",
            "ubuntu:latest",
            "--licence-type",
            "LINUX",
        ])
        .unwrap_err();

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_defaults() {
        let options = Wrapper::parse_from([
            "create",
            "--datacenter-id",
            "dc",
            "--licence-type",
            "LINUX",
            "--size",
            "50GB",
        ])
        .options;

        assert_eq!(options.size, 50.0);
        assert_eq!(options.volume_type, "HDD");
        assert_eq!(options.bus, "VIRTIO");
    }
}
