use super::{PatternResult, SegmentDef, compile_template};
use crate::types::RouteId;

/// A compiled path template together with the identifier reported on match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    id: RouteId,
    template: String,
    segments: Vec<SegmentDef>,
}

impl RoutePattern {
    pub fn compile(
        id: impl Into<RouteId>,
        template: &str,
        case_sensitive: bool,
    ) -> PatternResult<Self> {
        let segments = compile_template(template, case_sensitive)?;
        Ok(Self {
            id: id.into(),
            template: template.to_string(),
            segments,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn segments(&self) -> &[SegmentDef] {
        &self.segments
    }

    pub fn is_static(&self) -> bool {
        self.segments.iter().all(SegmentDef::is_literal)
    }

    pub fn has_catch_all(&self) -> bool {
        matches!(self.segments.last(), Some(SegmentDef::CatchAll { .. }))
    }

    pub fn param_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .flat_map(SegmentDef::param_names)
            .collect()
    }
}
