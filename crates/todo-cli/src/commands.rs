use anyhow::{bail, Result};

use crate::cli::Commands;
use todo_core::{Todo, TodoDraft, TodoManager};

/// Run a todo command against `manager`.
///
/// `serve` and `init-db` are handled before a manager exists and are rejected here.
pub async fn execute(command: Commands, manager: &TodoManager, json: bool) -> Result<()> {
    match command {
        Commands::List { completed, pending } => {
            let todos = if completed {
                manager.get_completed_todos().await?
            } else if pending {
                manager.get_pending_todos().await?
            } else {
                manager.list_todos().await?
            };

            print_todos(&todos, json)?;
        }

        Commands::Show { id } => match manager.get_todo(id).await? {
            Some(todo) => print_todo(&todo, json)?,
            None => bail!("Todo not found: {}", id),
        },

        Commands::Add {
            title,
            description,
            completed,
        } => {
            let draft = TodoDraft {
                title,
                description,
                completed,
            };
            let todo = manager.create_todo(draft).await?;

            if !json {
                println!("✓ Todo created: {}", todo.id);
            }
            print_todo(&todo, json)?;
        }

        Commands::Update {
            id,
            title,
            description,
            completed,
        } => {
            let patch = TodoDraft {
                title,
                description,
                completed,
            };

            match manager.update_todo(id, patch).await? {
                Some(todo) => {
                    if !json {
                        println!("✓ Todo updated: {}", todo.id);
                    }
                    print_todo(&todo, json)?;
                }
                None => bail!("Todo not found: {}", id),
            }
        }

        Commands::Delete { id } => {
            if !manager.delete_todo(id).await? {
                bail!("Todo not found: {}", id);
            }
            println!("✓ Todo deleted: {}", id);
        }

        Commands::Search { text } => {
            let todos = manager.search_todos_by_title(&text).await?;
            print_todos(&todos, json)?;
        }

        Commands::Serve { .. } | Commands::InitDb => {
            bail!("Command does not operate on todos");
        }
    }

    Ok(())
}

fn print_todos(todos: &[Todo], json: bool) -> Result<()> {
    print!("{}", render_todos(todos, json)?);
    Ok(())
}

fn print_todo(todo: &Todo, json: bool) -> Result<()> {
    print!("{}", render_todo(todo, json)?);
    Ok(())
}

fn render_todos(todos: &[Todo], json: bool) -> Result<String> {
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(todos)?));
    }

    let mut out = format!("Todos: {}\n\n", todos.len());
    for todo in todos {
        out.push_str(&render_todo(todo, false)?);
        out.push('\n');
    }

    Ok(out)
}

fn render_todo(todo: &Todo, json: bool) -> Result<String> {
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(todo)?));
    }

    let mark = if todo.completed { "x" } else { " " };
    let mut out = format!("[{}] {} {}\n", mark, todo.id, todo.title);
    if let Some(description) = &todo.description {
        out.push_str(&format!("  Description: {}\n", description));
    }
    out.push_str(&format!("  Created: {}\n", todo.created_at));
    out.push_str(&format!("  Updated: {}\n", todo.updated_at));

    Ok(out)
}
