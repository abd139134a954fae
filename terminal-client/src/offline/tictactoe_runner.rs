use std::io::Write;

use common::log;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::{HELP_TEXT, parse_command};
use crate::render::render_status;
use super::{LocalGame, Reply, SessionSettings};

pub async fn run_tictactoe_game(
    mut game: LocalGame,
    settings: &SessionSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    log!(
        "Starting {} game, difficulty {}{}",
        settings.mode,
        settings.difficulty,
        if settings.perfect_play { ", perfect play" } else { "" }
    );
    println!("{}\n", HELP_TEXT);
    println!("{}", game.render());

    loop {
        if game.state().is_bot_turn()
            && let Some(index) = game.choose_bot_move()?
        {
            println!("{}", render_status(game.state()));
            tokio::time::sleep(settings.bot_move_delay).await;
            println!("{}", game.apply_bot_move(index)?);
            continue;
        }

        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match game.handle_command(parse_command(&line)) {
            Reply::Text(text) => println!("{}", text),
            Reply::Quit => break,
        }
    }

    game.save_records();
    log!("Session finished");
    Ok(())
}
