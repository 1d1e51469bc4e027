use snafu::Snafu;
use std::path::PathBuf;

pub(crate) type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub(crate) enum Error {
    #[snafu(display("Unable to serialize the command output: {}", source))]
    JsonSerialize { source: serde_json::Error },

    #[snafu(display("'--spec-file' is required when the desired state is 'present'"))]
    MissingSpecFile,

    #[snafu(display("{}", source))]
    Model { source: emrctl_model::Error },

    #[snafu(display("Unable to read spec file '{}': {}", path.display(), source))]
    SpecFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Unable to parse spec file '{}': {}", path.display(), source))]
    SpecFileParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}
