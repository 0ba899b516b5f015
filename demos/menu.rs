use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use paging_window::{
    PagingDataStructure, PagingOptions, PagingWindow, SliceSource, WindowUpdate,
};

fn main() {
    let tabs = [
        "Home", "News", "Sports", "Weather", "Music", "Movies", "Books", "Travel",
    ];
    // Pretend every character is 10px wide, plus 20px of padding.
    let width = |tab: &&str| tab.len() as f64 * 10.0 + 20.0;

    let changes = Arc::new(AtomicUsize::new(0));
    let options = PagingOptions::new(240.0).with_on_change(Some({
        let changes = Arc::clone(&changes);
        move |_: &PagingDataStructure<&str>, _: WindowUpdate| {
            changes.fetch_add(1, Ordering::Relaxed);
        }
    }));

    let mut menu = match PagingWindow::new(SliceSource::new(&tabs), width, options) {
        Ok(menu) => menu,
        Err(err) => {
            eprintln!("failed to build menu: {err}");
            return;
        }
    };
    println!("initial: {:?}", menu.structure().as_slice());

    for tab in ["Music", "Travel", "News"] {
        match menu.select(tab) {
            Ok(update) => println!(
                "select {tab}: visible={:?} width_delta={} distance={}",
                menu.structure().as_slice(),
                update.width_delta,
                update.distance
            ),
            Err(err) => println!("select {tab}: {err}"),
        }
    }

    if let Ok(update) = menu.resize(480.0) {
        println!(
            "resize 480: visible={:?} width_delta={}",
            menu.structure().as_slice(),
            update.width_delta
        );
    }

    println!("on_change fired {} times", changes.load(Ordering::Relaxed));
}
