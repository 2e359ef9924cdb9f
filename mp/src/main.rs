use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use mealplan::cli::{Cli, Command};
use mealplan::config::Config;
use mealplan::{Day, IngredientSet, MealPlan, MealType, PlanStore, SlotKey, SuggestionEngine};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("mealplan starting");

    match cli.command {
        Command::Suggest { ingredients } => {
            let mut set = IngredientSet::new();
            for ingredient in &ingredients {
                set.add(ingredient)?;
            }

            let engine = SuggestionEngine::builtin();
            for m in engine.suggest(set.as_slice()) {
                println!("{} {}", m.name.cyan().bold(), format!("[{}]", m.category).dimmed());
                println!("  {}", m.description);
                println!("  재료: {}", m.ingredients.join(", "));
                if m.match_count > 0 {
                    println!("  {} {}", "매치:".yellow(), m.matched_ingredients.join(", "));
                }
            }
        }
        Command::Select { slot, meal } => {
            let store = PlanStore::open(&config.store_path)?;
            let mut plan = store.load();
            plan.select(slot, &meal);
            store.save(&plan)?;
            println!("{} {} -> {}", "✓".green(), slot.to_string().cyan(), meal);
        }
        Command::Show => {
            let store = PlanStore::open(&config.store_path)?;
            let plan = store.load();
            print_plan(&plan);
        }
        Command::Random => {
            let store = PlanStore::open(&config.store_path)?;
            let engine = SuggestionEngine::builtin();
            let mut plan = store.load();
            plan.randomize(engine.catalog(), &mut rand::rng());
            store.save(&plan)?;
            println!("{} 일주일 식단이 랜덤으로 생성되었습니다", "✓".green());
            print_plan(&plan);
        }
        Command::Clear => {
            let store = PlanStore::open(&config.store_path)?;
            store.save(&MealPlan::new())?;
            println!("{} 식단이 초기화되었습니다", "✓".green());
        }
    }

    Ok(())
}

fn print_plan(plan: &MealPlan) {
    for meal_type in MealType::ALL {
        println!("{}", meal_type.label_ko().bold());
        for day in Day::ALL {
            let slot = SlotKey::new(meal_type, day);
            match plan.get(slot) {
                Some(name) => println!("  {} {}", day.label_ko(), name.cyan()),
                None => println!("  {} {}", day.label_ko(), "메뉴를 선택해주세요".dimmed()),
            }
        }
    }
}
