//! Ruleset records - one game and its classification.
//!
//! A `Ruleset` is created once with its seven required fields and then
//! decorated: aliases, a tooltip description, an image, playable versions,
//! a blog post, and variants. Once handed to a `CatalogBuilder` it is
//! read-only.
//!
//! Variants are full rulesets. They are reachable only through their
//! parent and never appear in the top-level catalog order themselves.

use serde::{Deserialize, Serialize};

use crate::content::RichContent;
use crate::core::{TableConfig, VariantDepth};
use crate::render::markup::{Block, FontSize, Node};

/// Link (or plain label) naming a ruleset.
///
/// The label is always the ruleset title. Without a URL it renders as
/// bare text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InformationLink {
    pub label: String,
    pub url: Option<String>,
}

impl InformationLink {
    /// Create a link for `title`. Blank URLs count as absent.
    pub fn new(title: &str, url: Option<&str>) -> Self {
        Self {
            label: title.to_string(),
            url: url
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map(str::to_string),
        }
    }

    /// Check whether this links anywhere.
    #[must_use]
    pub fn is_link(&self) -> bool {
        self.url.is_some()
    }

    /// Render at large font size.
    #[must_use]
    pub fn to_node(&self) -> Node {
        let inner = match &self.url {
            Some(url) => Node::text_link(self.label.clone(), url.clone()),
            None => Node::text(self.label.clone()),
        };
        Node::sized(Block::Span, FontSize::Large, vec![inner])
    }
}

/// Illustrative image for a ruleset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

impl Image {
    /// Hover text inviting better images.
    #[must_use]
    pub fn title_for(ruleset_title: &str, maintainer: &str) -> String {
        format!("Know of a better image for {ruleset_title}? Please let {maintainer} know!")
    }

    /// Centered image wrapped in a link to its source.
    #[must_use]
    pub fn to_node(&self, ruleset_title: &str, config: &TableConfig) -> Node {
        let image = Node::Image {
            src: self.url.clone(),
            title: Self::title_for(ruleset_title, &config.maintainer),
            max_width_px: config.image_max_width_px,
        };
        Node::Container {
            block: Block::Div,
            font_size: None,
            centered: true,
            children: vec![Node::Link {
                href: self.url.clone(),
                children: vec![image],
            }],
        }
    }
}

/// Link to an interactive implementation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayableLink {
    /// Platform or language ("HTML", "Java").
    pub label: String,
    pub url: String,
}

/// A combinatorial game ruleset.
///
/// ## Example
///
/// ```
/// use cgt_ruleset_table::content::{length_label, RichContent};
/// use cgt_ruleset_table::ruleset::Ruleset;
///
/// let mut nim = Ruleset::new(
///     "Nim",
///     None,
///     true,
///     length_label(true),
///     "By XOR-rule.",
///     RichContent::link("In P", "https://en.wikipedia.org/wiki/Nim"),
///     " ",
/// );
/// nim.add_alias("Sticks (misere)");
///
/// assert_eq!(nim.partiality_label(), "Impartial");
/// assert_eq!(nim.information_link.label, "Nim");
/// assert!(!nim.information_link.is_link());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruleset {
    /// Display name, also the row anchor. Unique within a catalog.
    pub title: String,

    pub information_link: InformationLink,

    /// Both players always have the same options.
    pub is_impartial: bool,

    /// Usually `"Short"` or `"Loopy"`, but any content is accepted.
    pub length: RichContent,

    /// Outcome class of the starting position.
    pub initial_outcome: RichContent,

    /// Complexity of determining optimal play.
    pub complexity: RichContent,

    pub other_properties: RichContent,

    pub aliases: Vec<String>,

    /// Tooltip for the name cell.
    pub brief_description: Option<String>,

    pub image: Option<Image>,

    pub playable_links: Vec<PlayableLink>,

    /// URL of the blog post about this ruleset.
    pub blog_link: Option<String>,

    /// Rule variations, in display order.
    pub variants: Vec<Ruleset>,
}

impl Ruleset {
    /// Create a ruleset with its required fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        information_url: Option<&str>,
        is_impartial: bool,
        length: impl Into<RichContent>,
        initial_outcome: impl Into<RichContent>,
        complexity: impl Into<RichContent>,
        other_properties: impl Into<RichContent>,
    ) -> Self {
        let title = title.into();
        Self {
            information_link: InformationLink::new(&title, information_url),
            title,
            is_impartial,
            length: length.into(),
            initial_outcome: initial_outcome.into(),
            complexity: complexity.into(),
            other_properties: other_properties.into(),
            aliases: Vec::new(),
            brief_description: None,
            image: None,
            playable_links: Vec::new(),
            blog_link: None,
            variants: Vec::new(),
        }
    }

    /// Add an alternate name.
    pub fn add_alias(&mut self, name: impl Into<String>) {
        self.aliases.push(name.into());
    }

    /// Replace the tooltip description. An empty string clears it.
    pub fn set_brief_description(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.brief_description = if text.is_empty() { None } else { Some(text) };
    }

    /// Replace the image.
    pub fn set_image(&mut self, url: impl Into<String>) {
        self.image = Some(Image { url: url.into() });
    }

    /// Add a link to a playable version.
    pub fn add_playable_link(&mut self, url: impl Into<String>, label: impl Into<String>) {
        self.playable_links.push(PlayableLink {
            label: label.into(),
            url: url.into(),
        });
    }

    /// Replace the blog post link.
    pub fn add_blog_link(&mut self, url: impl Into<String>) {
        self.blog_link = Some(url.into());
    }

    /// Attach a variant after any existing ones.
    pub fn add_variant(&mut self, variant: Ruleset) {
        self.variants.push(variant);
    }

    /// Add an alias (builder pattern).
    #[must_use]
    pub fn with_alias(mut self, name: impl Into<String>) -> Self {
        self.add_alias(name);
        self
    }

    /// Set the tooltip description (builder pattern).
    #[must_use]
    pub fn with_brief_description(mut self, text: impl Into<String>) -> Self {
        self.set_brief_description(text);
        self
    }

    /// Set the image (builder pattern).
    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.set_image(url);
        self
    }

    /// Add a playable link (builder pattern).
    #[must_use]
    pub fn with_playable_link(mut self, url: impl Into<String>, label: impl Into<String>) -> Self {
        self.add_playable_link(url, label);
        self
    }

    /// Set the blog link (builder pattern).
    #[must_use]
    pub fn with_blog_link(mut self, url: impl Into<String>) -> Self {
        self.add_blog_link(url);
        self
    }

    /// Attach a variant (builder pattern).
    #[must_use]
    pub fn with_variant(mut self, variant: Ruleset) -> Self {
        self.add_variant(variant);
        self
    }

    /// `"Impartial"` or `"Strictly partisan"`.
    #[must_use]
    pub fn partiality_label(&self) -> &'static str {
        if self.is_impartial {
            "Impartial"
        } else {
            "Strictly partisan"
        }
    }

    /// Small-font block listing playable versions.
    ///
    /// Empty (not even the "Play it:" prefix) when there are none.
    #[must_use]
    pub fn playable_links_summary(&self) -> Node {
        let mut children = Vec::new();
        if !self.playable_links.is_empty() {
            children.push(Node::text(" Play it: "));
            for (i, link) in self.playable_links.iter().enumerate() {
                if i > 0 {
                    children.push(Node::text(", "));
                }
                children.push(Node::text_link(link.label.clone(), link.url.clone()));
            }
            children.push(Node::LineBreak);
        }
        Node::sized(Block::Div, FontSize::Small, children)
    }

    /// Line break and small "AKA: a, b" span, or nothing without aliases.
    #[must_use]
    pub fn alias_summary(&self) -> Vec<Node> {
        if self.aliases.is_empty() {
            return Vec::new();
        }
        let aka = format!("AKA: {}", self.aliases.join(", "));
        vec![
            Node::LineBreak,
            Node::sized(Block::Span, FontSize::Small, vec![Node::text(aka)]),
        ]
    }

    /// Small-font `" (blog post)"` block, if a blog link is set.
    #[must_use]
    pub fn blog_link_node(&self) -> Option<Node> {
        self.blog_link.as_ref().map(|url| {
            Node::sized(
                Block::Div,
                FontSize::Small,
                vec![
                    Node::text(" ("),
                    Node::text_link("blog post", url.clone()),
                    Node::text(")"),
                ],
            )
        })
    }

    /// Image cell content: the image, or a blank placeholder.
    #[must_use]
    pub fn image_node(&self, config: &TableConfig) -> Node {
        match &self.image {
            Some(image) => image.to_node(&self.title, config),
            None => Node::placeholder(),
        }
    }

    /// Variants that get rows under this ruleset, in display order.
    pub fn displayed_variants(&self, depth: VariantDepth) -> Vec<&Ruleset> {
        let mut out = Vec::new();
        for variant in &self.variants {
            out.push(variant);
            if depth == VariantDepth::Recursive {
                out.extend(variant.displayed_variants(depth));
            }
        }
        out
    }

    /// Rows occupied by this ruleset and its displayed variants.
    #[must_use]
    pub fn row_count(&self, depth: VariantDepth) -> usize {
        match depth {
            VariantDepth::OneLevel => self.variants.len() + 1,
            VariantDepth::Recursive => {
                1 + self
                    .variants
                    .iter()
                    .map(|v| v.row_count(depth))
                    .sum::<usize>()
            }
        }
    }

    /// Iterate this ruleset and every descendant variant, depth-first.
    pub fn iter_tree(&self) -> impl Iterator<Item = &Ruleset> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let ruleset = stack.pop()?;
            stack.extend(ruleset.variants.iter().rev());
            Some(ruleset)
        })
    }
}
