use html_escape::encode_text;

use crate::models::attributes::{AttributeValue, LIST_REVERSED, LIST_START};
use crate::models::{Block, BlockKind, Document, ListType};

struct OpenList {
    list_type: ListType,
    item_id: String,
    reversed: Option<AttributeValue>,
    start: Option<AttributeValue>,
}

impl OpenList {
    /// Whether `block` continues this list rather than starting a sibling list
    fn continues_with(&self, block: &Block, list_type: ListType) -> bool {
        self.list_type == list_type
            && self.reversed.as_ref() == block.attribute(LIST_REVERSED)
            && self.start.as_ref() == block.attribute(LIST_START)
    }
}

struct HtmlWriter {
    out: String,
    lists: Vec<OpenList>,
}

impl HtmlWriter {
    fn line(&mut self, depth: usize, content: &str) {
        for _ in 0..depth {
            self.out.push_str("  ");
        }
        self.out.push_str(content);
        self.out.push('\n');
    }

    fn list_depth(&self) -> usize {
        self.lists.len().saturating_sub(1) * 2
    }

    fn open_list(&mut self, block: &Block, list_type: ListType, item_id: &str) {
        let depth = self.lists.len() * 2;
        let tag = match list_type {
            ListType::Numbered => {
                let mut tag = String::from("<ol");
                if block.attribute(LIST_REVERSED) == Some(&AttributeValue::Bool(true)) {
                    tag.push_str(" reversed");
                }
                if let Some(start) = block.attribute(LIST_START).and_then(AttributeValue::as_int)
                    && start != 1
                {
                    tag.push_str(&format!(" start=\"{start}\""));
                }
                tag.push('>');
                tag
            }
            ListType::Bulleted => "<ul>".to_string(),
        };
        self.line(depth, &tag);
        self.lists.push(OpenList {
            list_type,
            item_id: item_id.to_string(),
            reversed: block.attribute(LIST_REVERSED).cloned(),
            start: block.attribute(LIST_START).cloned(),
        });
        self.line(depth + 1, "<li>");
    }

    fn close_list(&mut self) {
        let depth = self.list_depth();
        if let Some(list) = self.lists.pop() {
            self.line(depth + 1, "</li>");
            let tag = match list.list_type {
                ListType::Numbered => "</ol>",
                ListType::Bulleted => "</ul>",
            };
            self.line(depth, tag);
        }
    }

    fn next_item(&mut self, item_id: &str) {
        let depth = self.list_depth();
        self.line(depth + 1, "</li>");
        self.line(depth + 1, "<li>");
        if let Some(list) = self.lists.last_mut() {
            list.item_id = item_id.to_string();
        }
    }

    fn content(&mut self, block: &Block) {
        let depth = if self.lists.is_empty() {
            0
        } else {
            self.list_depth() + 2
        };
        let text = encode_text(block.text());
        let html = match block.kind() {
            BlockKind::Paragraph => format!("<p>{text}</p>"),
            BlockKind::Heading { level } => format!("<h{level}>{text}</h{level}>"),
            BlockKind::Object { name } => {
                format!("<figure class=\"{}\"></figure>", encode_text(name))
            }
        };
        self.line(depth, &html);
    }

    fn block(&mut self, block: &Block) {
        let (Some(item_id), Some(list_type)) = (block.list_item_id(), block.list_type()) else {
            while !self.lists.is_empty() {
                self.close_list();
            }
            self.content(block);
            return;
        };
        let level = usize::try_from(block.list_indent().unwrap_or(0)).unwrap_or(0);

        while self.lists.len() > level + 1 {
            self.close_list();
        }

        if let Some(list) = self.lists.last()
            && self.lists.len() == level + 1
        {
            if !list.continues_with(block, list_type) {
                self.close_list();
            } else if list.item_id != item_id {
                self.next_item(item_id);
            }
        }

        while self.lists.len() < level + 1 {
            self.open_list(block, list_type, item_id);
        }

        self.content(block);
    }
}

/// Render the document as HTML
///
/// Consecutive list blocks become nested `<ol>`/`<ul>` elements. A numbered
/// list takes `reversed` and `start` from the block that opens it; a block at
/// the same level with a different type, `listReversed` or `listStart` opens a
/// new list.
pub fn render(doc: &Document) -> String {
    let mut writer = HtmlWriter {
        out: String::new(),
        lists: Vec::new(),
    };
    for block in doc.blocks() {
        writer.block(block);
    }
    while !writer.lists.is_empty() {
        writer.close_list();
    }
    writer.out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::markdown;

    #[test]
    fn test_render_plain_blocks() {
        let doc = Document::new(vec![
            Block::heading(2, "Title"),
            Block::paragraph("a < b & c"),
        ]);

        insta::assert_snapshot!(render(&doc), @r"
        <h2>Title</h2>
        <p>a &lt; b &amp; c</p>
        ");
    }

    #[test]
    fn test_render_reversed_list_with_start() {
        let doc = Document::new(vec![
            Block::list_item("One", "a", 0, ListType::Numbered)
                .with_attribute(LIST_REVERSED, true)
                .with_attribute(LIST_START, 3i64),
            Block::list_item("Two", "b", 0, ListType::Numbered)
                .with_attribute(LIST_REVERSED, true)
                .with_attribute(LIST_START, 3i64),
        ]);

        insta::assert_snapshot!(render(&doc), @r#"
        <ol reversed start="3">
          <li>
            <p>One</p>
          </li>
          <li>
            <p>Two</p>
          </li>
        </ol>
        "#);
    }

    #[test]
    fn test_render_nested_and_multi_block_items() {
        let doc = markdown::parse("1. One\n\n   More\n\n   - Sub\n\n2. Two\n\nAfter\n");

        insta::assert_snapshot!(render(&doc), @r"
        <ol>
          <li>
            <p>One</p>
            <p>More</p>
            <ul>
              <li>
                <p>Sub</p>
              </li>
            </ul>
          </li>
          <li>
            <p>Two</p>
          </li>
        </ol>
        <p>After</p>
        ");
    }

    #[test]
    fn test_render_switching_list_type_starts_new_list() {
        let doc = Document::new(vec![
            Block::list_item("One", "a", 0, ListType::Numbered),
            Block::list_item("Dot", "b", 0, ListType::Bulleted),
        ]);

        insta::assert_snapshot!(render(&doc), @r"
        <ol>
          <li>
            <p>One</p>
          </li>
        </ol>
        <ul>
          <li>
            <p>Dot</p>
          </li>
        </ul>
        ");
    }

    #[test]
    fn test_render_splits_lists_on_reversed() {
        let doc = Document::new(vec![
            Block::list_item("a", "a", 0, ListType::Numbered).with_attribute(LIST_REVERSED, true),
            Block::list_item("b", "b", 0, ListType::Numbered).with_attribute(LIST_REVERSED, true),
            Block::list_item("c", "c", 0, ListType::Numbered).with_attribute(LIST_REVERSED, false),
        ]);

        insta::assert_snapshot!(render(&doc), @r"
        <ol reversed>
          <li>
            <p>a</p>
          </li>
          <li>
            <p>b</p>
          </li>
        </ol>
        <ol>
          <li>
            <p>c</p>
          </li>
        </ol>
        ");
    }

    #[test]
    fn test_render_splits_lists_on_start() {
        let doc = Document::new(vec![
            Block::list_item("a", "a", 0, ListType::Numbered).with_attribute(LIST_START, 1i64),
            Block::list_item("b", "b", 0, ListType::Numbered).with_attribute(LIST_START, 5i64),
        ]);

        insta::assert_snapshot!(render(&doc), @r#"
        <ol>
          <li>
            <p>a</p>
          </li>
        </ol>
        <ol start="5">
          <li>
            <p>b</p>
          </li>
        </ol>
        "#);
    }

    #[test]
    fn test_render_object_block() {
        let doc = Document::new(vec![Block::object("image")]);
        insta::assert_snapshot!(render(&doc), @r#"<figure class="image"></figure>"#);
    }
}
