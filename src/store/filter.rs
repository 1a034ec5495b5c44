//! Tag filter state.
//!
//! Per-tag filters and the "no tags" filter are mutually exclusive, so they
//! live in a single enum rather than separate flags.

use std::collections::BTreeMap;

use crate::entities::Todo;

/// Filter state of a single tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagFilter {
    /// Task must carry at least one included tag.
    Include,
    /// Task must carry none of the excluded tags.
    Exclude,
}

/// State of the "no tags" filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoTagsFilter {
    /// Only tasks without any tag.
    RequireNone,
    /// Only tasks with at least one tag.
    RequireSome,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FilterMode {
    #[default]
    Off,
    PerTag(BTreeMap<String, TagFilter>),
    NoTags(NoTagsFilter),
}

impl FilterMode {
    /// Cycle a tag neutral -> include -> exclude -> neutral. Leaves no-tags mode.
    pub fn toggle_tag(&mut self, tag: &str) {
        let mut filters = match std::mem::take(self) {
            Self::PerTag(filters) => filters,
            Self::Off | Self::NoTags(_) => BTreeMap::new(),
        };

        match filters.get(tag).copied() {
            None => {
                filters.insert(tag.to_string(), TagFilter::Include);
            }
            Some(TagFilter::Include) => {
                filters.insert(tag.to_string(), TagFilter::Exclude);
            }
            Some(TagFilter::Exclude) => {
                filters.remove(tag);
            }
        }

        *self = if filters.is_empty() { Self::Off } else { Self::PerTag(filters) };
    }

    /// Cycle off -> require no tags -> require some tag -> off. Drops per-tag filters.
    pub fn toggle_no_tags(&mut self) {
        *self = match self {
            Self::Off | Self::PerTag(_) => Self::NoTags(NoTagsFilter::RequireNone),
            Self::NoTags(NoTagsFilter::RequireNone) => Self::NoTags(NoTagsFilter::RequireSome),
            Self::NoTags(NoTagsFilter::RequireSome) => Self::Off,
        };
    }

    pub fn clear(&mut self) {
        *self = Self::Off;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Off)
    }

    /// Per-tag state, `None` when neutral.
    #[must_use]
    pub fn tag_state(&self, tag: &str) -> Option<TagFilter> {
        match self {
            Self::PerTag(filters) => filters.get(tag).copied(),
            _ => None,
        }
    }

    #[must_use]
    pub fn no_tags_state(&self) -> Option<NoTagsFilter> {
        match self {
            Self::NoTags(state) => Some(*state),
            _ => None,
        }
    }

    /// Tags that currently carry a filter, in lexicographic order.
    pub fn filtered_tags(&self) -> impl Iterator<Item = &str> {
        let filters = match self {
            Self::PerTag(filters) => Some(filters),
            _ => None,
        };
        filters.into_iter().flat_map(|f| f.keys().map(String::as_str))
    }

    #[must_use]
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Self::Off => true,
            Self::NoTags(NoTagsFilter::RequireNone) => todo.tags.is_empty(),
            Self::NoTags(NoTagsFilter::RequireSome) => !todo.tags.is_empty(),
            Self::PerTag(filters) => {
                let mut has_includes = false;
                let mut included = false;
                for (tag, state) in filters {
                    match state {
                        TagFilter::Include => {
                            has_includes = true;
                            included |= todo.has_tag(tag);
                        }
                        TagFilter::Exclude => {
                            if todo.has_tag(tag) {
                                return false;
                            }
                        }
                    }
                }
                !has_includes || included
            }
        }
    }
}
