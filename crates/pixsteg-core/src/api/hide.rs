use std::path::{Path, PathBuf};

use crate::media::image::FilterType;
use crate::{CodecOptions, SteganoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Debug)]
pub struct HideApi {
    carrier: Option<PathBuf>,
    payload: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
    filter: FilterType,
}

impl Default for HideApi {
    fn default() -> Self {
        Self {
            carrier: None,
            payload: None,
            output: None,
            options: CodecOptions::default(),
            filter: FilterType::Triangle,
        }
    }
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// The image that stays visible, it gets enlarged if it is too small
    pub fn with_carrier_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.carrier = Some(image.as_ref().to_path_buf());
        self
    }

    /// The image that gets hidden
    pub fn with_payload_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.payload = Some(image.as_ref().to_path_buf());
        self
    }

    /// Target PNG file
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Resampling filter used when the carrier has to be enlarged
    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    pub fn execute(self) -> Result<(), SteganoError> {
        let Some(carrier) = self.carrier else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(payload) = self.payload else {
            return Err(SteganoError::PayloadNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };

        crate::commands::hide(&carrier, &payload, &output, self.options, self.filter)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::media::Persist;
    use crate::test_utils::random_grid;
    use crate::SteganoError;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.png");
        let secret = temp_dir.path().join("secret.png");
        random_grid(40, 60, 3, 1).save_as(&carrier).unwrap();
        random_grid(20, 20, 3, 2).save_as(&secret).unwrap();

        crate::api::hide::prepare()
            .with_carrier_image(&carrier)
            .with_payload_image(&secret)
            .with_output(temp_dir.path().join("image-with-secret.png"))
            .execute()
            .expect("Failed to hide image in image");

        assert!(temp_dir.path().join("image-with-secret.png").exists());
    }

    #[test]
    fn should_complain_about_missing_inputs() {
        assert!(matches!(
            crate::api::hide::prepare().execute(),
            Err(SteganoError::CarrierNotSet)
        ));
        assert!(matches!(
            crate::api::hide::prepare()
                .with_carrier_image("carrier.png")
                .execute(),
            Err(SteganoError::PayloadNotSet)
        ));
        assert!(matches!(
            crate::api::hide::prepare()
                .with_carrier_image("carrier.png")
                .with_payload_image("secret.png")
                .execute(),
            Err(SteganoError::TargetNotSet)
        ));
    }
}
