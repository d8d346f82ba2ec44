use std::path::{Path, PathBuf};

use crate::{CodecOptions, SteganoError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options, they must match the ones used for hiding
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the image that contains the hidden image
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the PNG file the unveiled image will be saved to
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<(), SteganoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output_file) = self.output_file else {
            return Err(SteganoError::TargetNotSet);
        };

        crate::commands::unveil(&secret_media, &output_file, self.options)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::media::image::open_grid;
    use crate::media::Persist;
    use crate::test_utils::random_grid;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let stego = temp_dir.path().join("stego.png");
        let secret = random_grid(12, 9, 3, 5);
        crate::encode(&random_grid(30, 40, 3, 6), &secret)
            .unwrap()
            .save_as(&stego)
            .unwrap();

        crate::api::unveil::prepare()
            .from_secret_file(&stego)
            .into_output_file(temp_dir.path().join("unveiled.png"))
            .execute()
            .expect("Failed to unveil image from image");

        let unveiled = open_grid(temp_dir.path().join("unveiled.png")).unwrap();
        assert_eq!(unveiled, secret);
    }
}
