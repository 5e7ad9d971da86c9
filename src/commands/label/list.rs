use anyhow::Result;
use clap::Parser;

use super::types::{Label, LabelTarget};
use super::utils::get_all_labels;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List labels, of every resource or of a single one")]
pub struct Options {
    #[clap(flatten)]
    pub target: LabelTarget,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Label>()?;

    let labels_path = options.target.labels_path()?;

    let mut labels = get_all_labels(&state.http, labels_path.as_deref()).await?;

    for label in &mut labels {
        options.target.annotate(label);
    }

    output.print(&labels)
}
