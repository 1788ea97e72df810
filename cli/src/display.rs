use filmpath_core::{BfsTree, Record, RecordField, Recommendation, ScorePair};

use crate::colors::ColorScheme;
use crate::search::{SearchRequest, SearchResult};
use crate::utils::format_number;

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    println!(
        "🎬 Finding path from {} to {}",
        colors.person_name(&format!("\"{}\"", request.from_name)),
        colors.person_name(&format!("\"{}\"", request.to_name))
    );
    match request.credits {
        Some(field) => println!("⚙️  Linking people through shared {} credits (BFS)", field),
        None => println!("⚙️  Linking people through a saved graph (BFS)"),
    }
    println!("🔍 Searching...");
}

pub fn display_search_results(result: SearchResult, quiet: bool, verbose: bool, colors: &ColorScheme) {
    if verbose {
        println!("\n---\n");
    }

    match &result.path {
        Some(path) => display_successful_path(path, quiet, verbose, colors),
        None => {
            println!(
                "{} {} and {}",
                colors.error("❌ No path found between"),
                colors.person_name(&format!("\"{}\"", result.from_name)),
                colors.person_name(&format!("\"{}\"", result.to_name))
            );
        }
    }

    if verbose {
        display_search_statistics(result.people_visited, result.search_duration, colors);
    }
}

fn display_successful_path(path: &[String], quiet: bool, verbose: bool, colors: &ColorScheme) {
    if verbose {
        let step_count = path.len() - 1;
        println!(
            "{} Found path with {} steps:\n",
            colors.success("✅"),
            colors.number(&step_count.to_string())
        );
    }

    println!("{}", format_path_flow(path, colors));

    if !quiet {
        println!();
        for (step_index, name) in path.iter().enumerate() {
            let step_number = format!("{}.", step_index + 1);
            println!(
                "{:2} {}",
                colors.step_number(&step_number),
                colors.person_name(&format!("\"{}\"", name))
            );
        }
    }
}

pub fn format_path_flow(path: &[String], colors: &ColorScheme) -> String {
    path.iter()
        .map(|name| colors.person_name(&format!("\"{}\"", name)).to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

fn display_search_statistics(people_visited: usize, search_duration: f64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Explored {} people in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(people_visited)),
        colors.number(&format!("{:.3}", search_duration))
    );
}

pub fn display_overview(record: &Record, colors: &ColorScheme) {
    let year = record.year.as_deref().unwrap_or("unknown year");
    println!("{} ({})", colors.movie_title(&record.title), colors.year(year));

    if !record.genres.is_empty() {
        println!("{}", format_genres(record.genres.iter().map(String::as_str), colors));
    }

    match record.overview.as_deref() {
        Some(overview) if !overview.trim().is_empty() => println!("{}", overview),
        _ => println!("No overview available."),
    }
}

pub fn format_genres<'a>(genres: impl IntoIterator<Item = &'a str>, colors: &ColorScheme) -> String {
    genres
        .into_iter()
        .map(|genre| colors.genre(genre).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn display_correlation(pair: &ScorePair<'_>, colors: &ColorScheme) {
    println!(
        "🎞️  Correlation between {} and {}",
        colors.movie_title(&format!("\"{}\"", pair.left.title)),
        colors.movie_title(&format!("\"{}\"", pair.right.title))
    );
    println!("   shared cast:   {}", colors.number(&pair.cast_overlap.to_string()));
    println!("   shared crew:   {}", colors.number(&pair.crew_overlap.to_string()));
    println!("   shared genres: {}", colors.number(&pair.genre_overlap.to_string()));
    println!(
        "{} Score: {}",
        colors.success("✅"),
        colors.number(&format!("{:.3}", pair.score()))
    );
}

pub fn display_recommendations(heading: &str, recommendations: &[Recommendation<'_>], colors: &ColorScheme) {
    println!("{}", heading);

    if recommendations.is_empty() {
        println!("{}", colors.error("No movies to recommend."));
        return;
    }

    for (rank, recommendation) in recommendations.iter().enumerate() {
        let step_number = format!("{}.", rank + 1);
        let year = recommendation.record.year.as_deref().unwrap_or("?");
        println!(
            "{:3} {} ({}) [{}]",
            colors.step_number(&step_number),
            colors.movie_title(&recommendation.record.title),
            colors.year(year),
            colors.number(&recommendation.score.to_string())
        );
    }
}

pub fn display_separation(tree: &BfsTree<'_>, credits: Option<RecordField>, colors: &ColorScheme) {
    let person = colors.person_name(&format!("\"{}\"", tree.root()));
    match credits {
        Some(field) => println!("🎬 {} through shared {} credits", person, field),
        None => println!("🎬 {} in the saved graph", person),
    }
    println!(
        "   reachable people: {}",
        colors.number(&format_number(tree.reached_count().saturating_sub(1)))
    );
    println!(
        "   mean distance:    {}",
        colors.number(&format!("{:.3}", tree.mean_distance_rounded()))
    );
    println!(
        "   max distance:     {}",
        colors.number(&tree.max_distance().to_string())
    );
}
