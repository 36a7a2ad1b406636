//! This module pairs words with the image of their sign.

pub mod store;

pub use store::{AssetStore, Directory};

/// The image used for cells that only pad a row.
pub const PLACEHOLDER: &str = "images/_placeholder.png";

/// The image used for words that have no sign.
pub const MISSING: &str = "images/_missing.png";

/// The directory in which signs are looked up.
pub const IMAGES_DIR: &str = "images";

/// The extension of the sign images.
pub const IMAGE_EXTENSION: &str = "png";

/// A word and the image of its sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSign {
    /// The word as it is written in the script.
    pub word: String,

    /// The path to the image of the sign.
    pub image: String,
}

impl WordSign {
    /// Creates a sign that only pads a row.
    pub fn pad() -> WordSign {
        WordSign {
            word: String::new(),
            image: PLACEHOLDER.to_owned(),
        }
    }

    /// Returns true if the sign has no image.
    pub fn is_missing(&self) -> bool {
        self.image == MISSING
    }
}

/// Returns true if a word ends with a plural mark or a period.
fn has_strippable_suffix(word: &str) -> bool {
    word.ends_with('s') || word.ends_with('.')
}

/// Looks up the images of words in an asset store.
pub struct Resolver<'a, S: AssetStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: AssetStore + ?Sized> Resolver<'a, S> {
    /// Creates a resolver that looks up images in a store.
    pub fn new(store: &'a S) -> Resolver<'a, S> {
        Resolver { store }
    }

    /// Returns the path to the image of a word.
    ///
    /// Trailing `s` and `.` are stripped one at a time, so `cats.` is looked up as `cat`. The
    /// exact path is tried first, then its lower case version. If none exists, the path to the
    /// missing image is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use std::collections::HashSet;
    /// # use signsheet::signs::{Resolver, MISSING};
    /// let store: HashSet<String> = vec!["images/cat.png".to_owned()].into_iter().collect();
    /// let resolver = Resolver::new(&store);
    /// assert_eq!(resolver.resolve("Cats."), "images/cat.png");
    /// assert_eq!(resolver.resolve("dog"), MISSING);
    /// ```
    pub fn resolve(&self, word: &str) -> String {
        let mut word = word;

        // Each iteration strips one char, so this ends.
        while has_strippable_suffix(word) {
            word = &word[..word.len() - 1];
        }

        if word.is_empty() {
            return MISSING.to_owned();
        }

        let sign = format!("{}/{}.{}", IMAGES_DIR, word, IMAGE_EXTENSION);
        if self.store.exists(&sign) {
            return sign;
        }

        let sign_lowercase = sign.to_lowercase();
        if self.store.exists(&sign_lowercase) {
            return sign_lowercase;
        }

        debug!("no sign for \"{}\"", word);
        MISSING.to_owned()
    }

    /// Pairs a word with its sign.
    ///
    /// Empty words never reach the store, they get the placeholder image just like pads.
    pub fn sign(&self, word: &str) -> WordSign {
        if word.is_empty() {
            return WordSign::pad();
        }

        WordSign {
            word: word.to_owned(),
            image: self.resolve(word),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use test_case::test_case;

    use crate::signs::{Resolver, WordSign, MISSING, PLACEHOLDER};

    fn store(paths: &[&str]) -> HashSet<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test_case("dog", "images/dog.png" ; "exact word")]
    #[test_case("dogs", "images/dog.png" ; "plural")]
    #[test_case("dog.", "images/dog.png" ; "period")]
    #[test_case("dogs.", "images/dog.png" ; "plural and period")]
    #[test_case("Dog", "images/dog.png" ; "lower case fallback")]
    #[test_case("Cat", "images/Cat.png" ; "exact case wins")]
    #[test_case("bus", "images/bu.png" ; "every trailing s goes")]
    #[test_case("moss", MISSING ; "double s")]
    #[test_case("bird", MISSING ; "unknown word")]
    fn resolves(word: &str, expected: &str) {
        let store = store(&[
            "images/dog.png",
            "images/Cat.png",
            "images/cat.png",
            "images/bu.png",
        ]);
        assert_eq!(Resolver::new(&store).resolve(word), expected);
    }

    #[test]
    fn no_upper_case_fallback() {
        let store = store(&["images/Dog.png"]);
        assert_eq!(Resolver::new(&store).resolve("dog."), MISSING);
    }

    #[test_case("s" ; "single s")]
    #[test_case("..." ; "only periods")]
    #[test_case("s.s." ; "mixed")]
    fn stripped_to_nothing(word: &str) {
        let store = store(&["images/.png"]);
        assert_eq!(Resolver::new(&store).resolve(word), MISSING);
    }

    #[test]
    fn stripped_words_are_looked_up_directly() {
        let store = store(&["images/cat.png"]);
        let resolver = Resolver::new(&store);
        assert_eq!(resolver.resolve("cat"), resolver.resolve("cats."));
    }

    #[test]
    fn empty_words_are_pads() {
        let store = store(&[]);
        let resolver = Resolver::new(&store);
        assert_eq!(resolver.sign(""), WordSign::pad());
        assert_eq!(resolver.sign("").image, PLACEHOLDER);
    }

    #[test]
    fn signs_keep_the_written_word() {
        let store = store(&["images/cat.png"]);
        let sign = Resolver::new(&store).sign("Cats.");
        assert_eq!(sign.word, "Cats.");
        assert_eq!(sign.image, "images/cat.png");
        assert!(!sign.is_missing());
    }
}
