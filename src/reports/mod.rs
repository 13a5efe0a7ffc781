use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use slotforge::optimizer::SearchOutcome;
use slotforge::schedule::Schedule;
use slotforge::scorer::ScoreDetails;
use slotforge::season::SlotRole;
use std::time::Duration;

fn score_cell(score: i32) -> Cell {
    let color = if score >= 0 { Color::Green } else { Color::Red };
    Cell::new(score).fg(color)
}

pub fn print_search_summary(outcome: &SearchOutcome, elapsed: Duration) {
    println!("\n=== 🏆 FINAL RESULT ===");
    println!("Stopped:     {}", outcome.stop_reason);
    println!("Generations: {}", outcome.generations);
    println!("Best score:  {}", outcome.best_score);
    println!("Schedules:   {}", outcome.schedules.len());
    println!("Elapsed:     {:.2}s", elapsed.as_secs_f64());

    if outcome.schedules.is_empty() {
        return;
    }

    let mut scores: Vec<i32> = outcome.schedules.iter().map(|s| s.current_score()).collect();
    scores.sort_unstable_by(|a, b| b.cmp(a));
    let mean = scores.iter().map(|&s| s as f64).sum::<f64>() / scores.len() as f64;
    println!(
        "Quality:     best {} | worst {} | mean {:.1}",
        scores[0],
        scores[scores.len() - 1],
        mean
    );
}

pub fn print_validation_report(results: &[ScoreDetails]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Week"),
        Cell::new("Home"),
        Cell::new("Intl"),
        Cell::new("Venue"),
        Cell::new("Road"),
        Cell::new("Bye"),
        Cell::new("Quality").add_attribute(Attribute::Bold),
    ]);

    for (i, d) in results.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i),
            score_cell(d.score),
            Cell::new(d.one_game_per_week),
            Cell::new(d.fixed_home_games),
            Cell::new(d.fixed_matchups),
            Cell::new(d.shared_venues),
            Cell::new(d.road_trips),
            Cell::new(d.international_bye),
            Cell::new(d.quality),
        ]);
    }

    for i in 0..=8 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    println!("{}", table);

    let feasible = results.iter().filter(|d| d.is_feasible()).count();
    println!("Feasible: {} / {}", feasible, results.len());
}

pub fn print_score_breakdown(d: &ScoreDetails) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Check", "Count"]);
    table.add_row(vec![Cell::new("One game per week"), Cell::new(d.one_game_per_week)]);
    table.add_row(vec![Cell::new("Fixed home games"), Cell::new(d.fixed_home_games)]);
    table.add_row(vec![Cell::new("International games"), Cell::new(d.fixed_matchups)]);
    table.add_row(vec![Cell::new("Shared venues"), Cell::new(d.shared_venues)]);
    table.add_row(vec![Cell::new("Road trips"), Cell::new(d.road_trips)]);
    table.add_row(vec![Cell::new("International byes"), Cell::new(d.international_bye)]);
    table.add_row(vec![
        Cell::new("Score").add_attribute(Attribute::Bold),
        score_cell(d.score),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("{}", table);
}

/// One table per week, slots in gameslot order.
pub fn print_schedule(name: &str, schedule: &Schedule) {
    println!("\nSchedule: {}", name);

    let season = schedule.season();
    let league = season.league();
    let calendar = season.calendar();

    for week in 0..calendar.num_weeks() {
        let mut table = Table::new();
        table.load_preset(ASCII_FULL);
        table.set_header(vec!["Slot", "Kickoff", "Away", "", "Home"]);

        for gs in calendar.week_range(week) {
            let m = league.matchup(schedule.matchup_at(gs));
            let role = calendar.role(gs);
            let kickoff = if role == SlotRole::SundayDay {
                Cell::new(role)
            } else {
                Cell::new(role).add_attribute(Attribute::Bold)
            };
            table.add_row(vec![
                Cell::new(gs),
                kickoff,
                Cell::new(league.team_name(m.away)),
                Cell::new("@").set_alignment(CellAlignment::Center),
                Cell::new(league.team_name(m.home)),
            ]);
        }
        if let Some(col) = table.column_mut(0) {
            col.set_cell_alignment(CellAlignment::Right);
        }

        println!("\nWeek {}", week + 1);
        println!("{}", table);
    }
}
