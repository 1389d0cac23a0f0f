use std::path::Path;

use crate::app::domain::{MarkdownContent, Node, NodeKind};

/// Pre-order walk over a tree, parents before children, siblings in order.
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

impl Node {
    /// This node followed by every node below it, in reading order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Summary numbers for a tree, as shown by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    pub nodes: usize,
    pub depth: usize,
    pub links: usize,
    pub markdown: usize,
}

pub fn stats(root: &Node) -> TreeStats {
    let mut stats = TreeStats { depth: depth(root), ..Default::default() };
    for node in root.descendants() {
        stats.nodes += 1;
        match node.kind {
            NodeKind::Link(_) => stats.links += 1,
            NodeKind::Markdown(_) => stats.markdown += 1,
            _ => {}
        }
    }
    stats
}

/// Number of nodes on the longest root-to-leaf path.
pub fn depth(root: &Node) -> usize {
    1 + root.children().iter().map(depth).max().unwrap_or(0)
}

/// Every link destination, in reading order.
pub fn link_destinations(root: &Node) -> Vec<&str> {
    root.descendants()
        .filter_map(|node| match &node.kind {
            NodeKind::Link(link) => Some(link.href.as_str()),
            _ => None,
        })
        .collect()
}

/// Every markdown file reference, in reading order.
pub fn markdown_files(root: &Node) -> Vec<&Path> {
    root.descendants()
        .filter_map(|node| match &node.kind {
            NodeKind::Markdown(md) => match &md.content {
                MarkdownContent::File(path) => Some(path.as_path()),
                MarkdownContent::Source(_) => None,
            },
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::MarkdownTheme;
    use crate::app::services::compose::{
        column, link, markdown_file, markdown_source, row, text,
    };

    fn sample() -> Node {
        column()
            .child(text("title"))
            .child(row().child(link("/a", "A")).child(link("/b", "B")))
            .child(markdown_file("docs/a.md", MarkdownTheme::Dark))
            .child(markdown_source("# inline", MarkdownTheme::Light))
            .build()
    }

    #[test]
    fn test_descendants_pre_order() {
        let root = sample();
        let kinds: Vec<_> = root.descendants().map(Node::kind_name).collect();
        assert_eq!(
            kinds,
            vec!["column", "text", "row", "link", "link", "markdown", "markdown"]
        );
    }

    #[test]
    fn test_stats() {
        let s = stats(&sample());
        assert_eq!(s, TreeStats { nodes: 7, depth: 3, links: 2, markdown: 2 });
    }

    #[test]
    fn test_depth_of_leaf_is_one() {
        assert_eq!(depth(&text("x")), 1);
    }

    #[test]
    fn test_link_destinations_in_order() {
        assert_eq!(link_destinations(&sample()), vec!["/a", "/b"]);
    }

    #[test]
    fn test_markdown_files_skip_inline_sources() {
        assert_eq!(markdown_files(&sample()), vec![Path::new("docs/a.md")]);
    }
}
