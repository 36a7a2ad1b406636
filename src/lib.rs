//! This crate contains all the tools we need to turn a script into sheets of picture signs.

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub mod document;
pub mod fonts;
pub mod layout;
pub mod pipeline;
pub mod script;
pub mod signs;
pub mod warning;

use std::path::PathBuf;
use std::{error, fmt, io, result};

use printpdf::image::ImageError;

macro_rules! impl_from_error {
    ($type: ty, $variant: path, $from: ty) => {
        impl From<$from> for $type {
            fn from(e: $from) -> $type {
                $variant(e)
            }
        }
    };
}

/// The error type of the library.
#[derive(Debug)]
pub enum Error {
    /// Cannot read current directory.
    CannotReadCurrentDir,

    /// The configured row width is not usable.
    InvalidRowWidth(usize),

    /// Error while dealing with freetype.
    FreetypeError(freetype::Error),

    /// Error while dealing with printpdf.
    PrintpdfError(printpdf::errors::Error),

    /// Error while decoding an image.
    ImageError(ImageError),

    /// Error while reading a signsheet.toml.
    TomlError(toml::de::Error),

    /// The specified font was not found.
    FontNotFound(PathBuf),

    /// An image referenced by the document is not on the disk.
    AssetNotFound(PathBuf),

    /// Another io error occured.
    IoError(io::Error),
}

impl_from_error!(Error, Error::FreetypeError, freetype::Error);
impl_from_error!(Error, Error::PrintpdfError, printpdf::errors::Error);
impl_from_error!(Error, Error::ImageError, ImageError);
impl_from_error!(Error, Error::TomlError, toml::de::Error);
impl_from_error!(Error, Error::IoError, io::Error);

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::CannotReadCurrentDir => write!(fmt, "cannot read current directory"),
            Error::InvalidRowWidth(width) => {
                write!(fmt, "a row must hold at least one sign, got {}", width)
            }
            Error::FreetypeError(e) => write!(fmt, "freetype error: {}", e),
            Error::PrintpdfError(e) => write!(fmt, "printpdf error: {}", e),
            Error::ImageError(e) => write!(fmt, "image error: {}", e),
            Error::TomlError(e) => write!(fmt, "invalid signsheet.toml: {}", e),
            Error::FontNotFound(path) => write!(fmt, "couldn't find font \"{}\"", path.display()),
            Error::AssetNotFound(path) => {
                write!(fmt, "couldn't find image \"{}\"", path.display())
            }
            Error::IoError(e) => write!(fmt, "an io error occured: {}", e),
        }
    }
}

impl error::Error for Error {}

/// The result type of the library.
pub type Result<T> = result::Result<T, Error>;
