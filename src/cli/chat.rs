use std::sync::Arc;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::ai::chat::{Session, is_submittable};
use crate::ai::prompt::render_system_prompt;
use crate::core::{AppConfig, init_tracing};
use crate::openai::{OpenAiGateway, SharedGateway};

pub async fn run(config: AppConfig) -> Result<()> {
    init_tracing(&format!("{}=warn", env!("CARGO_CRATE_NAME")));

    let mut rl = DefaultEditor::new()?;

    let system_prompt = render_system_prompt()?;
    let gateway: SharedGateway = Arc::new(OpenAiGateway::from_config(&config));
    let mut session = Session::builder(gateway, &system_prompt).build();

    for msg in session.transcript() {
        println!("{}", msg.content());
    }

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                if !is_submittable(&line) {
                    continue;
                }
                let _ = rl.add_history_entry(&line);
                let reply = session.next_msg(&line).await;
                println!("{}", reply.content());
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
