use crate::metrics::TrainingHistory;

/// Plot the start-state value series as ASCII art
pub fn plot_convergence(history: &TrainingHistory, width: usize, height: usize) -> String {
    if history.convergence.is_empty() {
        return "No convergence data available".to_string();
    }
    plot_series(&history.convergence, "Start State Value", width, height)
}

/// Plot episode returns as ASCII art
pub fn plot_returns(history: &TrainingHistory, width: usize, height: usize) -> String {
    if history.returns.is_empty() {
        return "No return data available".to_string();
    }
    plot_series(&history.returns, "Episode Returns", width, height)
}

/// Generic series plotter
pub fn plot_series(values: &[f64], title: &str, width: usize, height: usize) -> String {
    if values.is_empty() || width < 10 || height < 5 {
        return format!("{}: Invalid data or dimensions", title);
    }

    let min_val = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_val = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if (max_val - min_val).abs() < f64::EPSILON {
        return format!("{}: All values are {:.4}", title, min_val);
    }

    let mut plot = vec![vec![' '; width]; height];

    // Add axes
    for row in plot.iter_mut() {
        row[0] = '|';
    }
    for j in 0..width {
        plot[height - 1][j] = '-';
    }
    plot[height - 1][0] = '+';

    let x_scale = (values.len().max(2) - 1) as f64 / (width - 3) as f64;
    let y_scale = (height - 3) as f64 / (max_val - min_val);

    for (i, &value) in values.iter().enumerate() {
        let x = ((i as f64 / x_scale) as usize + 2).min(width - 1);
        let lift = ((value - min_val) * y_scale) as usize;
        let y = (height - 3).saturating_sub(lift).min(height - 2);
        plot[y][x] = '*';
    }

    let mut output = format!("{}\n", title);
    output.push_str(&format!("Max: {:.4}\n", max_val));

    for row in plot.iter() {
        output.push_str(&row.iter().collect::<String>());
        output.push('\n');
    }

    output.push_str(&format!("Min: {:.4}\n", min_val));
    output.push_str(&format!("Points: {}\n", values.len()));

    output
}

/// One-line progress report
pub fn training_progress(episode: usize, total_episodes: usize, avg_return: f64, epsilon: f64) -> String {
    let progress = if total_episodes == 0 {
        1.0
    } else {
        (episode as f64 / total_episodes as f64).min(1.0)
    };
    let bar_length = 30;
    let filled = (progress * bar_length as f64) as usize;
    let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(bar_length - filled));

    format!(
        "Episode {}/{} {} {:.1}% | Avg Return: {:.2} | ε: {:.3}",
        episode,
        total_episodes,
        bar,
        progress * 100.0,
        avg_return,
        epsilon
    )
}

/// Summary table of a training run
pub fn history_summary(history: &TrainingHistory) -> String {
    let mut output = String::new();
    output.push_str("Training Summary\n");
    output.push_str("================\n");
    output.push_str(&format!(
        "Episodes: {}{}\n",
        history.episodes(),
        if history.interrupted { " (interrupted)" } else { "" }
    ));
    output.push_str(&format!("Goal reached: {} episodes\n", history.goal_episodes));

    if let Some(best) = history.best_adjusted_return() {
        output.push_str(&format!("Best adjusted return: {:.2}\n", best));
    }

    if !history.returns.is_empty() {
        let all = history.return_stats(0..history.episodes());
        output.push_str(&format!(
            "Returns: Average={:.2}, Std={:.2}, Min={:.2}, Max={:.2}\n",
            all.mean, all.std, all.min, all.max
        ));
    }

    if let Some(value) = history.final_convergence() {
        output.push_str(&format!("Start state value: {:.4}\n", value));
    }

    output
}
