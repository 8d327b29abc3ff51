use clap::Subcommand;
use crate::structs::target_args::TargetArgs;

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Aggregate recurring check-run annotations into issues
    Annotations {
        #[clap(flatten)]
        target: TargetArgs,
    },
    /// Report check-run durations per job group and the longest commit
    Timing {
        #[clap(flatten)]
        target: TargetArgs,
    },
    /// Run both the annotation and the timing analysis
    Analyze {
        #[clap(flatten)]
        target: TargetArgs,
    },
}

impl Commands {
    pub fn target(&self) -> &TargetArgs {
        match self {
            Commands::Annotations { target } | Commands::Timing { target } | Commands::Analyze { target } => target,
        }
    }

    pub fn wants_annotations(&self) -> bool {
        matches!(self, Commands::Annotations { .. } | Commands::Analyze { .. })
    }

    pub fn wants_timing(&self) -> bool {
        matches!(self, Commands::Timing { .. } | Commands::Analyze { .. })
    }
}
