use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents an input that is not a usable pixel grid. For example a zero sized image
    /// or a raw buffer whose length does not match the claimed shape
    #[error("Invalid pixel grid: {0}")]
    InvalidGrid(String),

    /// Represents a header size that is zero, wider than the carrier row or wider than 32 bits
    #[error("Header size {header_size} must be a positive integer less than or equal to the width {width}")]
    InvalidHeaderSize { header_size: usize, width: usize },

    /// Represents a color channel index that is not present in the image
    #[error("Invalid channel {channel}, the image has only {depth} channels")]
    InvalidChannel { channel: usize, depth: usize },

    /// Represents a dimension parameter that must be a positive integer but was not
    #[error("Parameter `{name}` must be a positive integer, got {value}")]
    InvalidDimension { name: &'static str, value: usize },

    /// Represents a payload dimension that does not fit into the header bits
    #[error("Payload dimension {0} cannot be stored in the header")]
    DimensionOverflow(usize),

    /// Represents an unveil where the header promises more data than the carrier can hold.
    /// For example when an image without a hidden image is decoded
    #[error("Hidden image needs {required} bits per channel but the carrier offers only {available}")]
    PayloadExceedsCarrier { required: usize, available: usize },

    /// Represents an unsupported media. For example a JPEG as target file
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents an image with a channel count the image crate cannot represent
    #[error("Images with {0} channels are not supported")]
    UnsupportedChannelCount(u8),

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure of the resampling collaborator.
    #[error("Resize error: {0}")]
    ResizeError(String),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("No payload image set")]
    PayloadNotSet,

    #[error("No target file set")]
    TargetNotSet,
}
