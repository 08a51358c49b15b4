//! Orders demo
//!
//! Builds a small order/line-item dataset over `MemorySource`, enables
//! the tree view and walks through toggle and reveal operations,
//! printing the decorated tree column after every apply.

use std::error::Error;
use std::fs::File;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use trellis::prelude::*;

fn print_rows(view: &TreeView<MemorySource>) {
    for row in view.visible_rows() {
        println!("{}", view.cell(row, "item").unwrap_or_default());
    }
    println!();
}

fn main() -> Result<(), Box<dyn Error>> {
    let _ = WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("orders.log")?,
    );

    let mut source = MemorySource::new(["id", "parent", "item", "qty"]);
    source.push_row(&[Some("1"), None, Some("Order #1001"), None]);
    source.push_row(&[Some("2"), Some("1"), Some("Espresso machine"), Some("1")]);
    source.push_row(&[Some("3"), Some("2"), Some("Portafilter"), Some("2")]);
    source.push_row(&[Some("4"), Some("1"), Some("Grinder"), Some("1")]);
    source.push_row(&[Some("5"), None, Some("Order #1002"), None]);
    source.push_row(&[Some("6"), Some("5"), Some("Kettle"), Some("1")]);

    let mut view = TreeView::new(source, TreeViewConfig::new("id", "parent", "item"));

    view.enable()?;
    view.apply()?;
    println!("collapsed by default:");
    print_rows(&view);

    // Expand the first order.
    if view.click(0, None).needs_apply() {
        view.apply()?;
    }
    println!("first order expanded:");
    print_rows(&view);

    // Make the portafilter reachable however deep it sits.
    if view.reveal("3")? {
        view.apply()?;
    }
    println!("after revealing item 3:");
    print_rows(&view);

    Ok(())
}
