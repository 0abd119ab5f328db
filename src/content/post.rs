//! Normalized works post model

use serde::Serialize;

/// A works entry reshaped for display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// CMS identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// First-view header
    pub hero: Hero,

    /// Non-empty sections in ascending index order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,

    /// Responsibilities, rich text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_content: Option<String>,

    /// Link to the published work
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_url: Option<String>,
}

/// Header region of a post
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    /// Catch copy shown as the page heading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Client / project name, rich text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,

    /// Publication date as `YYYY-MM-DD`
    pub date: String,

    /// Hero image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// One of the four repeating content groups
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    /// 1-based position in the CMS schema
    pub index: u8,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<Block>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Section {
    /// A section carries nothing worth rendering
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.blocks.is_empty() && self.image.is_none()
    }
}

/// Sub-heading and paragraph inside a section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Rich text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Block {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.text.is_none()
    }
}
