#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentPart {
    Literal(String),
    Param { name: String },
}

/// Parts of one dynamic segment, e.g. `@:username` is `[Literal("@"), Param("username")]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentPattern {
    pub parts: Vec<SegmentPart>,
}

impl SegmentPattern {
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().filter_map(|part| match part {
            SegmentPart::Param { name } => Some(name.as_str()),
            SegmentPart::Literal(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentDef {
    Literal(String),
    Dynamic(SegmentPattern),
    CatchAll { name: String },
}

impl SegmentDef {
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    pub fn param_names(&self) -> Vec<&str> {
        match self {
            Self::Literal(_) => Vec::new(),
            Self::Dynamic(pattern) => pattern.param_names().collect(),
            Self::CatchAll { name } => vec![name.as_str()],
        }
    }
}

impl SegmentDef {
    /// True when both definitions accept exactly the same concrete segments,
    /// ignoring parameter names.
    pub fn shape_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::CatchAll { .. }, Self::CatchAll { .. }) => true,
            (Self::Dynamic(a), Self::Dynamic(b)) => {
                a.parts.len() == b.parts.len()
                    && a.parts.iter().zip(b.parts.iter()).all(|pair| match pair {
                        (SegmentPart::Literal(la), SegmentPart::Literal(lb)) => la == lb,
                        (SegmentPart::Param { .. }, SegmentPart::Param { .. }) => true,
                        _ => false,
                    })
            }
            _ => false,
        }
    }
}
