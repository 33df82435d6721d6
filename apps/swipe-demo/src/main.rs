mod mailbox;
mod session;

use anyhow::{ensure, Context, Result};
use log::info;
use swipecell_ui::prelude::*;
use swipecell_ui::{Point, TapOutcome};

use crate::mailbox::Mailbox;
use crate::session::Session;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mailbox = Mailbox::new(&[
        "Quarterly report",
        "Lunch on Friday?",
        "Build failed: main",
        "Your order shipped",
        "Team offsite agenda",
    ])
    .context("mailbox swipe options")?;
    let mut session = Session::new(mailbox);
    info!("=== swipecell mailbox demo ===");
    session.describe();

    // A short swipe snaps back; a longer one leaves the buttons open.
    let row = session.row(0)?;
    session.swipe(&row, -60.0, 120)?;
    ensure!(row.state() == SwipeState::Center, "short swipe should close");
    session.swipe(&row, -110.0, 120)?;
    ensure!(row.is_active(), "long swipe should stay open");

    // Opening another row closes the first one.
    let other = session.row(1)?;
    other.show_swipe(SwipeOrientation::Right, true, |finished| {
        info!("show finished: {finished}");
    });
    session.settle()?;
    ensure!(row.state() == SwipeState::Center, "only one row may be open");

    // Tapping the flag button of the open row.
    let frames = other.action_frames();
    let flag = frames.get(1).context("flag button is laid out")?;
    let outcome = session.tap(Point::new(flag.x + 4.0, flag.y + flag.height / 2.0))?;
    ensure!(
        matches!(outcome, TapOutcome::ActionPerformed { .. }),
        "tap should hit the flag button, got {outcome:?}"
    );

    // A full swipe to the left edge toggles read state.
    let row = session.row(2)?;
    session.swipe(&row, 300.0, 120)?;

    // A full swipe to the right edge deletes the message.
    session.mailbox().select(ItemKey(3));
    let row = session.row(3)?;
    session.swipe(&row, -340.0, 120)?;

    // Starting to scroll closes whatever is open.
    let row = session.row(0)?;
    row.show_swipe(SwipeOrientation::Right, false, |_| {});
    session.container().scroll_began();
    session.settle()?;

    let actions = row.accessibility_custom_actions();
    info!(
        "accessibility actions on {}: {:?}",
        row.id(),
        actions.iter().map(|a| a.label.as_str()).collect::<Vec<_>>()
    );

    info!("final mailbox ({} messages):", session.mailbox().messages().len());
    session.describe();
    Ok(())
}
