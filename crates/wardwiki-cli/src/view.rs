use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use wardwiki_engine::{LinkKind, OutputNode};

const BULLET: &str = "• ";
const DIVIDER_WIDTH: usize = 40;

/// A same-site link that can be followed from the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub slug: String,
    /// Index into [`PageView::lines`] of the line the link starts on.
    pub line: usize,
}

/// A rendered page laid out as terminal lines.
#[derive(Debug, Default)]
pub struct PageView {
    pub lines: Vec<Line<'static>>,
    /// Followable links in reading order. External links are styled but not listed.
    pub links: Vec<LinkTarget>,
}

/// Lays out `node` as styled lines, highlighting the `selected` followable link.
pub fn page_view(node: &OutputNode, selected: Option<usize>) -> PageView {
    let mut writer = LineWriter {
        selected,
        ..LineWriter::default()
    };
    writer.walk(node);
    writer.flush();
    PageView {
        lines: writer.lines,
        links: writer.links,
    }
}

fn link_style(kind: LinkKind) -> Style {
    let color = match kind {
        LinkKind::Internal => Color::Cyan,
        LinkKind::MissingPage => Color::Red,
        LinkKind::External => Color::Blue,
    };
    Style::default().fg(color).add_modifier(Modifier::UNDERLINED)
}

#[derive(Default)]
struct LineWriter {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    links: Vec<LinkTarget>,
    selected: Option<usize>,
    list_depth: usize,
    // Depth of the list item whose bullet goes in front of the next span.
    pending_bullet: Option<usize>,
}

/// Work left to do while walking an output tree.
enum Step<'a> {
    Enter(&'a OutputNode, Style),
    EndBlock,
    EndList,
    EndItem,
}

impl LineWriter {
    fn walk(&mut self, root: &OutputNode) {
        let mut stack = vec![Step::Enter(root, Style::default())];
        while let Some(step) = stack.pop() {
            let (node, style) = match step {
                Step::Enter(node, style) => (node, style),
                Step::EndBlock => {
                    self.flush();
                    continue;
                }
                Step::EndList => {
                    self.list_depth -= 1;
                    continue;
                }
                Step::EndItem => {
                    self.pending_bullet = None;
                    continue;
                }
            };

            let style = match node {
                OutputNode::Fragment(_) => style,
                OutputNode::Text(text) => {
                    self.push(Span::styled(text.clone(), style));
                    style
                }
                OutputNode::Strong(_) => style.add_modifier(Modifier::BOLD),
                OutputNode::Emphasis(_) => style.add_modifier(Modifier::ITALIC),
                OutputNode::Link { href, kind, .. } => {
                    let mut style = style.patch(link_style(*kind));
                    if let Some(slug) = href.strip_prefix('/') {
                        if self.selected == Some(self.links.len()) {
                            style = style.add_modifier(Modifier::REVERSED);
                        }
                        self.links.push(LinkTarget {
                            slug: slug.to_string(),
                            line: self.lines.len(),
                        });
                    }
                    style
                }
                OutputNode::Block(_) => {
                    self.flush();
                    stack.push(Step::EndBlock);
                    style
                }
                OutputNode::List(_) => {
                    self.list_depth += 1;
                    stack.push(Step::EndList);
                    style
                }
                OutputNode::ListItem(_) => {
                    self.flush();
                    self.pending_bullet = Some(self.list_depth);
                    stack.push(Step::EndItem);
                    style
                }
                OutputNode::Divider => {
                    self.flush();
                    self.lines.push(Line::styled(
                        "─".repeat(DIVIDER_WIDTH),
                        Style::default().fg(Color::DarkGray),
                    ));
                    style
                }
            };
            stack.extend(
                node.children()
                    .iter()
                    .rev()
                    .map(|child| Step::Enter(child, style)),
            );
        }
    }

    fn push(&mut self, span: Span<'static>) {
        if let Some(depth) = self.pending_bullet.take() {
            let indent = "  ".repeat(depth.saturating_sub(1));
            self.current.push(Span::styled(
                format!("{indent}{BULLET}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        self.current.push(span);
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.current)));
        }
    }
}
