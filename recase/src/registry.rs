//! The case strategy registry and conversion dispatcher
//!
//! The registry is built once from the fixed strategy set and is immutable
//! afterwards, so it is safe to share across threads. A process-wide
//! instance is available through [`Registry::global`]; callers who want to
//! control initialization (or surface construction errors themselves) can
//! hold their own [`Registry::new`] value instead.

use std::collections::HashMap;
use std::sync::OnceLock;

use recase_core::{strip_case_marker, CaseId, Strategy};

use crate::error::{ConvertError, RegistryError, Result};
use crate::input::CaseRef;

/// Process-wide registry instance
static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Immutable lookup tables over the built-in case strategies.
///
/// Two name tables are kept: `sources` holds only encode-capable strategies
/// (valid on the `case_from` side of a conversion), `targets` holds every
/// strategy. Each registered name is accompanied by its derived alias with
/// the literal case marker stripped, so `"snake_case"` and `"snake"` both
/// resolve.
#[derive(Debug)]
pub struct Registry {
    // One strategy per CaseId variant, in declaration order; strategy_for
    // relies on this layout.
    strategies: Vec<Strategy>,
    sources: HashMap<String, CaseId>,
    targets: HashMap<String, CaseId>,
}

impl Registry {
    /// Build the registry from the built-in strategy set.
    ///
    /// Fails if a segmentation pattern does not compile or if two distinct
    /// strategies claim the same name or alias. Neither can happen for the
    /// shipped set; both indicate a bug in a modified strategy table.
    pub fn new() -> std::result::Result<Self, RegistryError> {
        let mut strategies = Vec::with_capacity(CaseId::ALL.len());
        let mut sources = HashMap::new();
        let mut targets = HashMap::new();

        for id in CaseId::ALL {
            let strategy =
                Strategy::new(id).map_err(|source| RegistryError::Pattern { case: id, source })?;
            for &name in id.names() {
                let alias = strip_case_marker(name);
                register(&mut targets, name, id)?;
                register(&mut targets, &alias, id)?;
                if id.supports_segmentation() {
                    register(&mut sources, name, id)?;
                    register(&mut sources, &alias, id)?;
                }
            }
            strategies.push(strategy);
        }

        log::debug!(
            "case registry ready: {} strategies, {} source names, {} target names",
            strategies.len(),
            sources.len(),
            targets.len()
        );

        Ok(Self {
            strategies,
            sources,
            targets,
        })
    }

    /// The process-wide registry, built on first access.
    ///
    /// The built-in strategy set is collision-free by construction (covered
    /// by tests), so initialization cannot fail in practice.
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(|| {
            Registry::new().expect("built-in case strategy set must be consistent")
        })
    }

    /// Convert `text` from `case_from` to `case_to`.
    ///
    /// `case_from` must name or reference an encode-capable strategy;
    /// `case_to` accepts any registered strategy, including the decode-only
    /// stylistic ones.
    pub fn convert<'a, 'b>(
        &self,
        text: &str,
        case_from: impl Into<CaseRef<'a>>,
        case_to: impl Into<CaseRef<'b>>,
    ) -> Result<String> {
        let source = self.resolve_source(case_from.into())?;
        let target = self.resolve_target(case_to.into())?;
        log::trace!("converting {} -> {}: {text:?}", source.id(), target.id());

        let words = match source.segment(text) {
            Some(words) => words,
            // Unreachable after resolve_source, kept total rather than panicking
            None => return Err(ConvertError::UnsupportedAsSource(source.id())),
        };
        Ok(target.render(&words))
    }

    /// All identifiers accepted on the source side, sorted.
    pub fn source_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sources.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// All identifiers accepted on the target side, sorted.
    pub fn target_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.targets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn resolve_source(&self, case: CaseRef<'_>) -> Result<&Strategy> {
        match case {
            CaseRef::Id(id) if id.supports_segmentation() => Ok(self.strategy_for(id)),
            CaseRef::Id(id) => Err(ConvertError::UnsupportedAsSource(id)),
            CaseRef::Name(name) => match self.sources.get(name) {
                Some(&id) => Ok(self.strategy_for(id)),
                None => Err(ConvertError::UnknownSourceCase {
                    requested: name.to_string(),
                    supported: self.source_names().iter().map(|s| s.to_string()).collect(),
                }),
            },
        }
    }

    fn resolve_target(&self, case: CaseRef<'_>) -> Result<&Strategy> {
        match case {
            // Direct references are accepted unconditionally: every
            // strategy renders.
            CaseRef::Id(id) => Ok(self.strategy_for(id)),
            CaseRef::Name(name) => match self.targets.get(name) {
                Some(&id) => Ok(self.strategy_for(id)),
                None => Err(ConvertError::UnknownTargetCase {
                    requested: name.to_string(),
                    supported: self.target_names().iter().map(|s| s.to_string()).collect(),
                }),
            },
        }
    }

    fn strategy_for(&self, id: CaseId) -> &Strategy {
        // new() pushes one strategy per variant in CaseId::ALL order
        &self.strategies[id as usize]
    }
}

fn register(
    map: &mut HashMap<String, CaseId>,
    name: &str,
    id: CaseId,
) -> std::result::Result<(), RegistryError> {
    match map.get(name) {
        Some(&existing) if existing != id => Err(RegistryError::NameCollision {
            name: name.to_string(),
            first: existing,
            second: id,
        }),
        // A derived alias can equal the name it came from; re-registering
        // the same strategy is a no-op.
        Some(_) => Ok(()),
        None => {
            map.insert(name.to_string(), id);
            Ok(())
        }
    }
}
