use anyhow::Result;

use super::open_widget;

pub fn run() -> Result<()> {
    let widget = open_widget(None)?;

    for key in widget.store().available() {
        println!("{}", key);
    }
    Ok(())
}
