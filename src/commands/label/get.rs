use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};

use super::types::{Label, LabelTarget};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Get a label by URN, or by key on a resource")]
#[clap(group(
    ArgGroup::new("label")
        .required(true)
        .args(["label_urn", "label_key"])
))]
pub struct Options {
    #[clap(long = "label-urn", help = "URN of the label, e.g. urn:label:server:<id>:<key>")]
    pub label_urn: Option<String>,

    #[clap(long = "label-key", help = "Key of the label", requires = "resource_type")]
    pub label_key: Option<String>,

    #[clap(flatten)]
    pub target: LabelTarget,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Label>()?;

    let path = match options.label_urn {
        Some(urn) => format!("/labels/{urn}"),

        None => {
            let key = options
                .label_key
                .as_deref()
                .context("Pass --label-urn or --label-key")?;

            let labels_path = options
                .target
                .labels_path()?
                .context("--resource-type is required with --label-key")?;

            format!("{labels_path}/{key}")
        }
    };

    let mut label = state.http.get::<Label>(&path).await?;

    options.target.annotate(&mut label);

    output.print_one(&label)
}
