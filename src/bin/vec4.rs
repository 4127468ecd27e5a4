use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::{Context, bail};
    use clap::{Parser, Subcommand, ValueEnum};
    use vec4::Vec4d;

    #[derive(Debug, Parser)]
    #[command(about = "Evaluate four-component vector operations", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Compute the length of a vector
        Length {
            /// The x, y, z and w components
            #[arg(num_args = 4, allow_negative_numbers = true, required = true)]
            components: Vec<f64>,
        },
        /// Normalize a vector
        Normalize {
            /// The x, y, z and w components
            #[arg(num_args = 4, allow_negative_numbers = true, required = true)]
            components: Vec<f64>,

            /// How to treat a vector of zero length
            #[arg(short, long, value_enum, default_value_t = NormalizationMode::Safe)]
            mode: NormalizationMode,
        },
        /// Compare two vectors within a tolerance
        Compare {
            /// The components of the reference vector
            #[arg(long, num_args = 4, allow_negative_numbers = true, required = true)]
            lhs: Vec<f64>,

            /// The components of the vector to compare against the reference
            #[arg(long, num_args = 4, allow_negative_numbers = true, required = true)]
            rhs: Vec<f64>,

            /// Maximum absolute difference per component
            #[arg(long, conflicts_with = "rel_error")]
            abs_error: Option<f64>,

            /// Maximum difference per component relative to the reference
            #[arg(long)]
            rel_error: Option<f64>,
        },
        /// Project a homogeneous vector to 3D by dividing by w
        Project {
            /// The x, y, z and w components
            #[arg(num_args = 4, allow_negative_numbers = true, required = true)]
            components: Vec<f64>,

            /// Fail instead of producing infinite components
            #[arg(short, long)]
            checked: bool,
        },
    }

    #[derive(Clone, Copy, Debug, ValueEnum)]
    enum NormalizationMode {
        /// Leave a zero vector unchanged
        Safe,
        /// Fail on a zero vector
        Checked,
        /// Skip the zero check
        NonNull,
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();
        log::debug!("Running command {:?}", cli.command);

        match cli.command {
            Command::Length { components } => {
                let vector = parse_vector(&components)?;
                if vector.uses_scaled_length() {
                    log::info!(
                        "Squared length {} is out of range, computing scaled length",
                        vector.length2()
                    );
                }
                println!("{}", vector.length());
            }
            Command::Normalize { components, mode } => {
                let vector = parse_vector(&components)?;
                let normalized = match mode {
                    NormalizationMode::Safe => vector.normalized(),
                    NormalizationMode::Checked => vector
                        .normalized_exc()
                        .with_context(|| format!("Failed to normalize {vector}"))?,
                    NormalizationMode::NonNull => vector.normalized_non_null(),
                };
                println!("{normalized}");
            }
            Command::Compare {
                lhs,
                rhs,
                abs_error,
                rel_error,
            } => {
                let lhs = parse_vector(&lhs)?;
                let rhs = parse_vector(&rhs)?;
                let equal = match (abs_error, rel_error) {
                    (Some(e), None) => lhs.equal_with_abs_error(&rhs, e),
                    (None, Some(e)) => lhs.equal_with_rel_error(&rhs, e),
                    (None, None) => lhs == rhs,
                    (Some(_), Some(_)) => {
                        bail!("Only one of --abs-error and --rel-error may be given")
                    }
                };
                println!("{equal}");
            }
            Command::Project {
                components,
                checked,
            } => {
                let vector = parse_vector(&components)?;
                let projected = if checked {
                    vector
                        .try_to_vec3()
                        .with_context(|| format!("Failed to project {vector}"))?
                } else {
                    vector.to_vec3()
                };
                println!("{projected}");
            }
        }

        Ok(())
    }

    fn parse_vector(components: &[f64]) -> Result<Vec4d> {
        let Ok(components) = <[f64; 4]>::try_from(components) else {
            bail!(
                "Expected 4 vector components, got {}",
                components.len()
            );
        };
        let vector = Vec4d::from(components);
        log::debug!("Parsed vector {vector}");
        Ok(vector)
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
