//! Identifiers handed to the adapter's identifier-quoting routines.

use crate::expr::Expr;
use crate::select::Select;
use smallvec::SmallVec;

/// One dot-separated part of a qualified name.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Quoted with the dialect's identifier symbol
    Name(String),
    /// Rendered verbatim (e.g. the `*` of `t.*`)
    Raw(Expr),
}

/// Something that renders in identifier position.
///
/// Strings split on `.` so `"schema.table.column"` quotes each part
/// independently.
#[derive(Debug, Clone, PartialEq)]
pub enum Identifier {
    Segments(SmallVec<[Segment; 3]>),
    Expr(Expr),
    Select(Box<Select>),
}

impl Identifier {
    /// Builds a qualified identifier from already-split parts.
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        Identifier::Segments(segments.into_iter().collect())
    }

    /// The unquoted last segment, used to decide whether an alias is redundant.
    pub(crate) fn last_name(&self) -> Option<&str> {
        match self {
            Identifier::Segments(segments) => match segments.last() {
                Some(Segment::Name(name)) => Some(name),
                _ => None,
            },
            Identifier::Expr(_) | Identifier::Select(_) => None,
        }
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::Segments(
            value
                .split('.')
                .map(|segment| Segment::Name(segment.to_string()))
                .collect(),
        )
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Identifier::from(value.as_str())
    }
}

impl From<&String> for Identifier {
    fn from(value: &String) -> Self {
        Identifier::from(value.as_str())
    }
}

impl From<Expr> for Identifier {
    fn from(value: Expr) -> Self {
        Identifier::Expr(value)
    }
}

impl From<Select> for Identifier {
    fn from(value: Select) -> Self {
        Identifier::Select(Box::new(value))
    }
}

impl From<Vec<Segment>> for Identifier {
    fn from(value: Vec<Segment>) -> Self {
        Identifier::from_segments(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_strings_split() {
        let ident = Identifier::from("db.users.id");
        let Identifier::Segments(segments) = &ident else {
            panic!("expected segments");
        };
        assert_eq!(segments.len(), 3);
        assert_eq!(ident.last_name(), Some("id"));
    }

    #[test]
    fn raw_last_segment_has_no_name() {
        let ident = Identifier::from(vec![
            Segment::Name("t".into()),
            Segment::Raw(Expr::new("*")),
        ]);
        assert_eq!(ident.last_name(), None);
        assert_eq!(Identifier::from(Expr::new("NOW()")).last_name(), None);
    }
}
