#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use delve_cfg as cfg;
pub use delve_reflect as reflect;

pub use delve_reflect::Reflect;
pub use delve_reflect::access::{PathError, get, get_as};
pub use delve_reflect::derive;

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::reflect::access::{PathAccessor, ReflectPathGet, ResolveError, Walker};
    use crate::{PathError, Reflect, get, get_as};

    #[derive(crate::derive::Reflect)]
    struct Document {
        title: String,
        sections: Vec<Section>,
        meta: BTreeMap<String, Box<dyn Reflect>>,
        parent: Option<Box<Document>>,
    }

    #[derive(crate::derive::Reflect)]
    struct Section {
        heading: String,
        #[reflect(rename = "wordCount")]
        word_count: u32,
        tags: [&'static str; 2],
    }

    fn document() -> Document {
        let mut meta: BTreeMap<String, Box<dyn Reflect>> = BTreeMap::new();
        meta.insert(String::from("version"), Box::new(3_u16));
        meta.insert(String::from("draft"), Box::new(None::<bool>));
        meta.insert(String::from("authors"), Box::new(vec![String::from("ann")]));

        Document {
            title: String::from("Guide"),
            sections: vec![Section {
                heading: String::from("Intro"),
                word_count: 120,
                tags: ["a", "b"],
            }],
            meta,
            parent: None,
        }
    }

    #[test]
    fn facade_lookups() {
        let doc = document();

        assert_eq!(get_as::<String>(&doc, "title").unwrap().map(String::as_str), Some("Guide"));
        assert_eq!(get_as::<u32>(&doc, "sections.0.wordCount"), Ok(Some(&120)));
        assert_eq!(get_as::<&str>(&doc, "sections.0.tags.1"), Ok(Some(&"b")));
        assert_eq!(get_as::<u16>(&doc, "meta.version"), Ok(Some(&3)));
        assert_eq!(
            get_as::<String>(&doc, "meta.authors.0").unwrap().map(String::as_str),
            Some("ann")
        );
    }

    #[test]
    fn nil_handling() {
        let doc = document();

        assert!(get(&doc, "parent").unwrap().is_none());
        assert!(get(&doc, "meta.draft").unwrap().is_none());

        let err = get(&doc, "parent.title").unwrap_err();
        assert_eq!(err.cause(), Some(ResolveError::NilPointer));
    }

    #[test]
    fn invalid_paths() {
        let doc = document();

        for path in ["", "title.0", "sections.1", "sections.x", "sections..0", "meta.missing", "nope"] {
            assert!(
                matches!(get(&doc, path), Err(PathError::InvalidPath { .. })),
                "{path}"
            );
        }
    }

    #[test]
    fn reusable_and_custom_paths() {
        let mut doc = document();
        let accessor = PathAccessor::parse("sections.0.heading");
        assert_eq!(accessor.get_as::<String>(&doc).unwrap().map(String::as_str), Some("Intro"));

        doc.sections[0].heading = String::from("Start");
        assert_eq!(accessor.get_as::<String>(&doc).unwrap().map(String::as_str), Some("Start"));

        let walker = Walker::new().with_separator('/');
        assert_eq!(walker.get_as::<u32>(&doc, "sections/0/wordCount"), Ok(Some(&120)));

        assert_eq!(doc.get_path_as::<u16>("meta.version"), Ok(Some(&3)));
    }

    #[test]
    fn nested_documents() {
        let child = Document {
            parent: Some(Box::new(document())),
            ..document()
        };
        assert_eq!(
            get_as::<String>(&child, "parent.sections.0.heading").unwrap().map(String::as_str),
            Some("Intro")
        );
        assert!(get(&child, "parent.parent").unwrap().is_none());
    }
}
