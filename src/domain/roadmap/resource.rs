//! Learning resources attached to milestones and their display buckets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of learning resource. Unknown wire values become `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Course,
    Documentation,
    Project,
    Video,
    #[default]
    Other,
}

impl ResourceType {
    /// Exact, case-sensitive match on the wire literal.
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw {
            Some("course") => ResourceType::Course,
            Some("documentation") => ResourceType::Documentation,
            Some("project") => ResourceType::Project,
            Some("video") => ResourceType::Video,
            _ => ResourceType::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Course => "course",
            ResourceType::Documentation => "documentation",
            ResourceType::Project => "project",
            ResourceType::Video => "video",
            ResourceType::Other => "other",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    /// Empty when the server sent no link.
    pub url: String,
    pub resource_type: ResourceType,
    /// Raw type text for display; `None` when the server sent none.
    pub type_label: Option<String>,
    pub duration: Option<String>,
}

impl Resource {
    pub fn new(title: impl Into<String>, url: impl Into<String>, type_label: &str) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            resource_type: ResourceType::from_wire(Some(type_label)),
            type_label: Some(type_label.to_string()),
            duration: None,
        }
    }

    pub fn bucket(&self) -> ResourceBucket {
        ResourceBucket::for_type(self.resource_type)
    }
}

/// Icon shown next to a resource link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceIcon {
    PlayCircle,
    BookOpen,
    ExternalLink,
}

/// Color family used to tint a resource entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceColor {
    Purple,
    Blue,
    Green,
    Red,
    Gray,
}

/// Display grouping for a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ResourceBucket {
    pub icon: ResourceIcon,
    pub color: ResourceColor,
}

impl ResourceBucket {
    pub const DEFAULT: Self = Self {
        icon: ResourceIcon::ExternalLink,
        color: ResourceColor::Gray,
    };

    pub fn for_type(resource_type: ResourceType) -> Self {
        use ResourceColor::*;
        use ResourceIcon::*;
        match resource_type {
            ResourceType::Course => Self { icon: PlayCircle, color: Purple },
            ResourceType::Documentation => Self { icon: BookOpen, color: Blue },
            ResourceType::Project => Self { icon: ExternalLink, color: Green },
            ResourceType::Video => Self { icon: PlayCircle, color: Red },
            ResourceType::Other => Self::DEFAULT,
        }
    }
}

/// Classifies a raw resource type. Total: unknown input gets the default bucket.
pub fn classify(resource_type: Option<&str>) -> ResourceBucket {
    ResourceBucket::for_type(ResourceType::from_wire(resource_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn video_lands_in_video_bucket() {
        let bucket = classify(Some("video"));
        assert_eq!(bucket.icon, ResourceIcon::PlayCircle);
        assert_eq!(bucket.color, ResourceColor::Red);
    }

    #[test]
    fn unknown_type_lands_in_default_bucket() {
        assert_eq!(classify(Some("podcast")), ResourceBucket::DEFAULT);
        assert_eq!(classify(Some("")), ResourceBucket::DEFAULT);
        assert_eq!(classify(None), ResourceBucket::DEFAULT);
    }

    #[test]
    fn known_types_get_distinct_buckets() {
        let buckets: HashSet<ResourceBucket> = ["course", "documentation", "project", "video"]
            .iter()
            .map(|t| classify(Some(t)))
            .collect();
        assert_eq!(buckets.len(), 4);
        assert!(!buckets.contains(&ResourceBucket::DEFAULT));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(classify(Some("Video")), ResourceBucket::DEFAULT);
    }

    #[test]
    fn resource_reports_its_bucket() {
        let resource = Resource::new("The Book", "https://doc.rust-lang.org/book/", "documentation");
        assert_eq!(resource.bucket().icon, ResourceIcon::BookOpen);
    }
}
