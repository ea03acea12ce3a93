use std::env;
use std::path::PathBuf;

use toml_edit::{Document, Item, Table};

/// The caller's `Cargo.toml`, used to find how a sibling crate is reachable
/// from the code a proc-macro emits.
///
/// # Example
///
/// ```rust, ignore
/// # use delve_macro_utils::Manifest;
/// let path: syn::Path = Manifest::load().get_crate_path("delve_reflect");
/// ```
///
/// Loading reads and parses the manifest, so a macro should load it once per
/// invocation and pass the resulting [`syn::Path`] around.
///
/// # Resolution rules
///
/// 1. If `dependencies` lists the crate (directly, or renamed through
///    `package = "..."`), return `::key`.
/// 2. If the crate name begins with `delve_` and `dependencies` lists the
///    `delve` facade, return `::delve::short_name` (`delve_reflect` ->
///    `::delve::reflect`).
/// 3. Repeat 1-2 with `dev-dependencies`.
/// 4. Otherwise fall back to `::crate_name`.
///
/// A crate that derives its own traits should declare
/// `extern crate self as crate_name;` so that the fallback resolves.
#[derive(Debug)]
pub struct Manifest {
    document: Option<Document<Box<str>>>,
}

const FACADE_NAME: &str = "delve";
const CRATE_PREFIX: &str = "delve_";

impl Manifest {
    #[inline(never)]
    fn manifest_path() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        Some(path)
    }

    /// Reads the manifest of the crate currently being compiled.
    ///
    /// A missing or unparsable manifest is not an error: every lookup then
    /// takes the `::crate_name` fallback.
    #[inline(never)]
    pub fn load() -> Self {
        let document = Self::manifest_path()
            .and_then(|path| std::fs::read_to_string(path).ok())
            .and_then(|text| Document::parse(text.into_boxed_str()).ok());
        Self { document }
    }

    #[inline]
    fn parse_path(path: &str) -> syn::Path {
        syn::parse_str(path).unwrap_or_else(|_| panic!("`{path}` is not a valid path"))
    }

    fn dependency_key<'t>(deps: &'t Table, name: &str) -> Option<&'t str> {
        deps.iter().find_map(|(key, item)| {
            let package = item.get("package").and_then(Item::as_str);
            (key == name || package == Some(name)).then_some(key)
        })
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if let Some(key) = Self::dependency_key(deps, name) {
            return Some(Self::parse_path(&format!("::{}", key.replace('-', "_"))));
        }

        let module = name.strip_prefix(CRATE_PREFIX)?;
        let facade = Self::dependency_key(deps, FACADE_NAME)?;
        Some(Self::parse_path(&format!("::{}::{module}", facade.replace('-', "_"))))
    }

    /// Returns the [`syn::Path`] under which `name` is reachable from the
    /// caller. See the type documentation for the resolution order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        if let Some(document) = &self.document {
            for table in ["dependencies", "dev-dependencies"] {
                if let Some(Item::Table(deps)) = document.get(table)
                    && let Some(path) = Self::find_in_deps(deps, name)
                {
                    return path;
                }
            }
        }

        Self::parse_path(&format!("::{name}"))
    }
}
