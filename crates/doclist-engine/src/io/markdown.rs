use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

use crate::models::attributes::{LIST_REVERSED, LIST_START};
use crate::models::block::new_list_item_id;
use crate::models::{Block, Document, ListType};

/// A list currently open in the Markdown source
struct OpenList {
    list_type: ListType,
    start: i64,
}

/// Collects pulldown-cmark events into flat blocks
#[derive(Default)]
struct BlockCollector {
    blocks: Vec<Block>,
    lists: Vec<OpenList>,
    /// `listItemId` of every open list item, innermost last
    items: Vec<String>,
    text: String,
    heading: Option<u8>,
    /// Whether a block is being accumulated (tight list items have no paragraph events)
    open: bool,
    image_depth: usize,
    saw_image: bool,
}

impl BlockCollector {
    fn begin(&mut self) {
        self.flush();
        self.open = true;
    }

    fn push_text(&mut self, text: &str) {
        if self.image_depth > 0 {
            return;
        }
        self.open = true;
        self.text.push_str(text);
    }

    fn flush(&mut self) {
        if !self.open {
            return;
        }
        let text = std::mem::take(&mut self.text);
        let text = text.trim();
        let block = match self.heading {
            Some(level) => Block::heading(level, text),
            None if text.is_empty() && self.saw_image => Block::object("image"),
            None => Block::paragraph(text),
        };
        self.open = false;
        self.saw_image = false;

        let block = match (self.items.last(), self.lists.last()) {
            (Some(item_id), Some(list)) => {
                let indent = self.lists.len() as i64 - 1;
                let block = block.into_list_item(item_id, indent, list.list_type);
                match list.list_type {
                    ListType::Numbered => block
                        .with_attribute(LIST_REVERSED, false)
                        .with_attribute(LIST_START, list.start),
                    ListType::Bulleted => block,
                }
            }
            _ => block,
        };
        self.blocks.push(block);
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Paragraph) => self.begin(),
            Event::End(TagEnd::Paragraph) => self.flush(),
            Event::Start(Tag::Heading { level, .. }) => {
                self.begin();
                self.heading = Some(heading_level(level));
            }
            Event::End(TagEnd::Heading(_)) => {
                self.flush();
                self.heading = None;
            }
            Event::Start(Tag::List(start)) => {
                self.flush();
                self.lists.push(match start {
                    Some(start) => OpenList {
                        list_type: ListType::Numbered,
                        start: i64::try_from(start).unwrap_or(i64::MAX),
                    },
                    None => OpenList {
                        list_type: ListType::Bulleted,
                        start: 1,
                    },
                });
            }
            Event::End(TagEnd::List(_)) => {
                self.flush();
                self.lists.pop();
            }
            Event::Start(Tag::Item) => {
                self.flush();
                self.items.push(new_list_item_id());
            }
            Event::End(TagEnd::Item) => {
                self.flush();
                self.items.pop();
            }
            Event::Start(Tag::Image { .. }) => {
                self.open = true;
                self.saw_image = true;
                self.image_depth += 1;
            }
            Event::End(TagEnd::Image) => {
                self.image_depth = self.image_depth.saturating_sub(1);
            }
            Event::Text(text) | Event::Code(text) => self.push_text(&text),
            Event::SoftBreak => self.push_text(" "),
            Event::HardBreak => self.push_text("\n"),
            _ => {}
        }
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Build a document from Markdown
///
/// Paragraphs and headings become blocks. Every list item paragraph becomes a
/// block carrying the list attributes of its item; numbered lists also get
/// `listReversed = false` and their `listStart`. A paragraph holding only an
/// image becomes an `image` object block.
pub fn parse(markdown: &str) -> Document {
    let mut collector = BlockCollector::default();
    for event in Parser::new(markdown) {
        collector.handle(event);
    }
    collector.flush();
    Document::new(collector.blocks)
}
