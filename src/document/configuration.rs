//! This module defines the configuration of a signsheet project. The configuration is parsed
//! from a TOML file located at the root of the project. Every setting takes a default value
//! that is also provided by this module.

use std::fs;
use std::path::{Path, PathBuf};
use std::{fmt, result};

use printpdf::{Mm, Pt};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::document::{Document, Window};
use crate::fonts::FontData;
use crate::layout::constants::{CAPTION_PADDING, FONT_SIZE, ROW_WIDTH};
use crate::signs::Directory;
use crate::{Error, Result as CResult};

/// The name of the configuration file of a project.
pub const CONFIG_FILE: &str = "signsheet.toml";

/// The title of a document whose configuration does not give one.
pub const DEFAULT_TITLE: &str = "signsheet";

/// Serializes a `Pt` structure.
// This is required to use in macro `serialize_with`.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn serialize_pt<S: Serializer>(pt: &Pt, serializer: S) -> result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(pt.0)
}

/// Deserializes a `Pt` structure.
pub fn deserialize_pt<'a, D: Deserializer<'a>>(deserializer: D) -> Result<Pt, D::Error> {
    deserializer.deserialize_f64(PtVisitor)
}

macro_rules! visit_from {
    ($visit: ident, $ty: ty) => {
        fn $visit<E>(self, value: $ty) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Pt(f64::from(value)))
        }
    };
}

macro_rules! visit_as {
    ($visit: ident, $ty: ty) => {
        fn $visit<E>(self, value: $ty) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Pt(value as f64))
        }
    };
}

/// Visitor for the `Pt` structure.
pub struct PtVisitor;

impl<'a> Visitor<'a> for PtVisitor {
    type Value = Pt;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a floatting point number")
    }

    visit_from!(visit_u8, u8);
    visit_from!(visit_u16, u16);
    visit_from!(visit_u32, u32);
    visit_as!(visit_u64, u64);
    visit_from!(visit_i8, i8);
    visit_from!(visit_i16, i16);
    visit_from!(visit_i32, i32);
    visit_as!(visit_i64, i64);
    visit_from!(visit_f32, f32);
    visit_from!(visit_f64, f64);
}

/// Holds the configuration of a project, including various measurements common to all pages.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The title of the document.
    pub title: String,

    /// The width of the page of the document.
    #[serde(serialize_with = "serialize_pt")]
    #[serde(deserialize_with = "deserialize_pt")]
    pub page_width: Pt,

    /// The height of the page of the document.
    #[serde(serialize_with = "serialize_pt")]
    #[serde(deserialize_with = "deserialize_pt")]
    pub page_height: Pt,

    /// The top margin of the document.
    #[serde(serialize_with = "serialize_pt")]
    #[serde(deserialize_with = "deserialize_pt")]
    pub top_margin: Pt,

    /// The left margin of the document.
    #[serde(serialize_with = "serialize_pt")]
    #[serde(deserialize_with = "deserialize_pt")]
    pub left_margin: Pt,

    /// The text width of the document.
    #[serde(serialize_with = "serialize_pt")]
    #[serde(deserialize_with = "deserialize_pt")]
    pub text_width: Pt,

    /// The text height of the document.
    #[serde(serialize_with = "serialize_pt")]
    #[serde(deserialize_with = "deserialize_pt")]
    pub text_height: Pt,

    /// The number of signs on a row.
    pub row_width: usize,

    /// The path to the font of the captions, relative to the project.
    pub font: String,

    /// The size of the captions.
    #[serde(serialize_with = "serialize_pt")]
    #[serde(deserialize_with = "deserialize_pt")]
    pub font_size: Pt,

    /// The space below a row of captions.
    #[serde(serialize_with = "serialize_pt")]
    #[serde(deserialize_with = "deserialize_pt")]
    pub caption_padding: Pt,
}

impl Config {
    /// Creates a default configuration with a title.
    pub fn with_title(title: &str) -> Config {
        let page_width: Pt = Mm(210.0).into();
        let page_height: Pt = Mm(297.0).into();
        let top_margin: Pt = Mm(30.0).into();
        let left_margin: Pt = Mm(30.0).into();
        let text_width: Pt = Mm(150.0).into();
        let text_height: Pt = Mm(237.0).into();

        Config {
            title: String::from(title),
            page_width,
            page_height,
            top_margin,
            left_margin,
            text_width,
            text_height,
            row_width: ROW_WIDTH,
            font: String::from("fonts/Times New Roman.ttf"),
            font_size: FONT_SIZE,
            caption_padding: CAPTION_PADDING,
        }
    }

    /// Parses a configuration and checks that it is usable.
    pub fn from_toml(content: &str) -> CResult<Config> {
        let config: Config = toml::from_str(content)?;

        if config.row_width == 0 {
            return Err(Error::InvalidRowWidth(config.row_width));
        }

        Ok(config)
    }

    /// Reads the configuration file of a project.
    pub fn from_file<P: AsRef<Path>>(path: P) -> CResult<Config> {
        let content = fs::read_to_string(path.as_ref())?;
        Config::from_toml(&content)
    }

    /// Reads the fonts of the document from the project directory.
    pub fn fonts<P: AsRef<Path>>(&self, root: P) -> CResult<Vec<FontData>> {
        Ok(vec![FontData::from_file(root.as_ref().join(&self.font))?])
    }

    /// Creates a document from the config, with images read from the project directory.
    pub fn init<P: AsRef<Path>>(&self, root: P) -> Document {
        let window = Window {
            x: self.left_margin,
            y: self.top_margin,
            width: self.text_width,
            height: self.text_height,
        };

        Document::new(
            &self.title,
            self.page_width,
            self.page_height,
            window,
            self.font_size,
            Directory::new(root),
        )
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::with_title(DEFAULT_TITLE)
    }
}

/// Looks for a configuration file in a directory and its ancestors.
pub fn find_config<P: AsRef<Path>>(start: P) -> Option<PathBuf> {
    let mut current_dir = start.as_ref().to_path_buf();

    loop {
        current_dir.push(CONFIG_FILE);

        if current_dir.is_file() {
            break Some(current_dir);
        }

        // Remove signsheet.toml
        current_dir.pop();

        // Go to the parent directory
        if !current_dir.pop() {
            break None;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir_all, File};
    use std::io::Write;

    use printpdf::Pt;

    use crate::document::configuration::{find_config, Config, CONFIG_FILE, DEFAULT_TITLE};
    use crate::{Error, Result};

    #[test]
    fn round_trip() -> Result<()> {
        let config = Config::with_title("Animals");
        let toml = toml::to_string(&config).unwrap();
        let parsed = Config::from_toml(&toml)?;

        assert_eq!(parsed.title, "Animals");
        assert_eq!(parsed.row_width, 5);
        assert_eq!(parsed.caption_padding, Pt(50.0));
        assert!((parsed.page_width.0 - config.page_width.0).abs() < 1e-9);

        Ok(())
    }

    #[test]
    fn integers_are_points() -> Result<()> {
        let toml = "title = \"t\"\n\
                    page_width = 600\n\
                    page_height = 800\n\
                    top_margin = 20\n\
                    left_margin = 20\n\
                    text_width = 560\n\
                    text_height = 760\n\
                    row_width = 3\n";
        let config = Config::from_toml(toml)?;

        assert_eq!(config.page_width, Pt(600.0));
        assert_eq!(config.row_width, 3);
        assert_eq!(config.font, "fonts/Times New Roman.ttf");
        assert_eq!(config.font_size, Pt(12.0));

        Ok(())
    }

    #[test]
    fn missing_settings_take_defaults() -> Result<()> {
        let config = Config::from_toml("row_width = 3\n")?;
        let default = Config::default();

        assert_eq!(config.row_width, 3);
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.font, default.font);
        assert_eq!(config.font_size, Pt(12.0));
        assert_eq!(config.caption_padding, Pt(50.0));
        assert!((config.page_width.0 - default.page_width.0).abs() < 1e-9);
        assert!((config.text_height.0 - default.text_height.0).abs() < 1e-9);

        let empty = Config::from_toml("")?;
        assert_eq!(empty.row_width, 5);
        assert!((empty.top_margin.0 - default.top_margin.0).abs() < 1e-9);

        Ok(())
    }

    #[test]
    fn rejects_zero_row_width() {
        let mut config = Config::with_title("t");
        config.row_width = 0;
        let toml = toml::to_string(&config).unwrap();

        match Config::from_toml(&toml) {
            Err(Error::InvalidRowWidth(0)) => (),
            other => panic!("expected an invalid row width, got {:?}", other),
        }
    }

    #[test]
    fn finds_config_in_ancestors() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let nested = dir.path().join("scripts/chapter");
        create_dir_all(&nested)?;

        assert_eq!(find_config(&nested), None);

        let mut file = File::create(dir.path().join(CONFIG_FILE))?;
        file.write_all(b"title = \"t\"")?;

        assert_eq!(find_config(&nested), Some(dir.path().join(CONFIG_FILE)));

        Ok(())
    }
}
