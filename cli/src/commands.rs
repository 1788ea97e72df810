use anyhow::{Context, Result};
use filmpath_core::{GraphConfig, RecordField, bfs, correlate_titles, recommend_by_genres, recommend_like, save_graph};

use crate::app::FilmPathApp;
use crate::args::{Args, Command};
use crate::colors::ColorScheme;
use crate::display::{
    display_correlation, display_overview, display_recommendations, display_search_info,
    display_search_results, display_separation, format_genres,
};
use crate::search::{create_search_request, execute_path_search, find_person};
use crate::utils::format_number;

pub fn run(args: Args, colors: &ColorScheme) -> Result<()> {
    let app = FilmPathApp::new(args.records)?;
    let verbose = args.verbose;

    match args.command {
        Command::Lookup { title, year } => {
            let index = app.load_index()?;
            let record = index.find(&title, year.as_deref())?;
            display_overview(record, colors);
        }

        Command::Path {
            from,
            to,
            graph,
            quiet,
        } => {
            let credits = graph.credits();
            let collaboration_graph = app.load_graph(&graph)?;

            let request = create_search_request(&from, &to, credits, &collaboration_graph)
                .with_context(|| format!("No such person in the {}", graph_name(credits)))?;

            if verbose {
                display_search_info(&request, colors);
            }

            tracing::debug!(from = %request.from_name, to = %request.to_name, "path search");
            let result = execute_path_search(request, &collaboration_graph)?;
            display_search_results(result, quiet, verbose, colors);
        }

        Command::Correlate {
            first,
            second,
            first_year,
            second_year,
        } => {
            let index = app.load_index()?;
            let pair = correlate_titles(
                &index,
                (first.as_str(), first_year.as_deref()),
                (second.as_str(), second_year.as_deref()),
            )?;
            display_correlation(&pair, colors);
        }

        Command::Recommend {
            genre,
            title,
            year,
            limit,
        } => {
            let index = app.load_index()?;

            match title {
                Some(title) => {
                    let recommendations = recommend_like(&index, &title, year.as_deref(), limit)?;
                    let heading = format!("🍿 Movies like {}:", colors.movie_title(&title));
                    display_recommendations(&heading, &recommendations, colors);
                }
                None => {
                    let known = index.genres();
                    for unknown in genre.iter().filter(|g| !known.contains(g.as_str())) {
                        tracing::warn!(genre = %unknown, "genre does not appear in any record");
                    }

                    let recommendations = recommend_by_genres(index.records(), &genre, limit);
                    let heading = format!(
                        "🍿 Movies for {}:",
                        format_genres(genre.iter().map(String::as_str), colors)
                    );
                    display_recommendations(&heading, &recommendations, colors);
                }
            }
        }

        Command::Separation { name, graph } => {
            let credits = graph.credits();
            let collaboration_graph = app.load_graph(&graph)?;

            let person = find_person(&name, &collaboration_graph)
                .with_context(|| format!("No such person in the {}", graph_name(credits)))?;
            let tree = bfs(&collaboration_graph, &person)?;
            display_separation(&tree, credits, colors);
        }

        Command::ExportGraph {
            out,
            field,
            limit,
            self_loops,
        } => {
            let graph = app.build_graph(field.into(), &GraphConfig::new(self_loops))?;
            let written = save_graph(&out, &graph, limit)
                .with_context(|| format!("Could not write graph to {:?}", out))?;

            println!(
                "{} Saved {} of {} people to {}",
                colors.success("✅"),
                colors.number(&format_number(written)),
                colors.number(&format_number(graph.node_count())),
                out.display()
            );
        }
    }

    Ok(())
}

fn graph_name(credits: Option<RecordField>) -> String {
    match credits {
        Some(field) => format!("{} graph", field),
        None => "saved graph".to_string(),
    }
}
