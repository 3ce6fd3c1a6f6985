/*!
 * # Editing Host
 *
 * This module wires the document model, the list editing feature and the
 * list property commands into a single [`Editor`].
 *
 * ## Architecture Overview
 *
 * ### 1. Single Source of Truth: the block `Document`
 * - Blocks are flat; list structure lives in `listItemId`, `listIndent` and
 *   `listType` attributes
 * - The selection is stored on the document and validated on every change
 *
 * ### 2. Transactions
 * - All writes happen inside `Document::change`, which commits one undo step
 *   or rolls everything back
 *
 * ### 3. Commands
 * - Each command implements the `Command` trait: observable `value` and
 *   `is_enabled`, recomputed by `refresh`, and an `execute`
 * - Commands do not guard against being executed while disabled; the
 *   editor does
 * - The list editing capability is injected into commands at construction
 *
 * ### 4. Push-based refresh
 * - The editor refreshes every command after selection changes, executed
 *   commands, undo and redo
 *
 * ## Usage Pattern
 *
 * ```rust
 * use doclist_engine::editing::{Editor, EditorCmd};
 * use doclist_engine::lists::ListPropertiesOptions;
 * use doclist_engine::models::Selection;
 *
 * let doc = doclist_engine::io::markdown::parse("1. One\n2. Two\n");
 * let mut editor = Editor::new(doc, ListPropertiesOptions::default());
 *
 * editor.set_selection(Selection::caret(0, 0)).unwrap();
 * editor.execute(EditorCmd::SetListReversed { reversed: true }).unwrap();
 *
 * let html = doclist_engine::io::html::render(editor.document());
 * assert!(html.starts_with("<ol reversed>"));
 * ```
 */

pub mod editor;

pub use editor::{Editor, EditorCmd, EditorError};
