//! Headless inventory demo
//! Loads the config and item definitions, then replays a short sequence of
//! clicks against a fresh inventory and logs the result.

use anyhow::{Context, Result};
use glam::{IVec2, Vec2};
use magiland::item::ItemId;
use magiland::pathfinding::{PassabilityGrid, BLOCKED};
use magiland::renderer::UIRenderer;
use magiland::{GameConfig, Inventory, InventoryUI, ItemRegistry, ItemStack, Pathfinder, PointerButton};

fn load_config() -> Result<GameConfig> {
    match std::env::args().nth(1) {
        Some(path) => GameConfig::load(&path).with_context(|| format!("loading config {}", path)),
        None => Ok(GameConfig::default()),
    }
}

fn load_registry(config: &GameConfig) -> Result<ItemRegistry> {
    match &config.items.definitions {
        Some(path) => ItemRegistry::load(path)
            .with_context(|| format!("loading item definitions {}", path.display())),
        None => Ok(ItemRegistry::with_defaults()),
    }
}

fn log_inventory(inventory: &Inventory<'_>) {
    for (index, slot) in inventory.slots().enumerate() {
        if let Some(stack) = slot {
            log::info!("  slot {:>2}: {} x{}", index, stack.item_id(), stack.count());
        }
    }
    match inventory.held() {
        Some(held) => log::info!("  held: {} x{}", held.item_id(), held.count()),
        None => log::info!("  held: nothing"),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info,magiland=debug"))
        .init();

    let config = load_config()?;
    let registry = load_registry(&config)?;
    let mut inventory = Inventory::from_config(&config.inventory).context("building inventory")?;

    let first = registry
        .iter()
        .filter(|item| item.is_stackable())
        .map(|item| item.id)
        .min()
        .unwrap_or(ItemId::STONE);
    inventory.add_stack(ItemStack::new(&registry, first, 5)?);
    inventory.add_stack(ItemStack::new(&registry, first, 2)?);

    let cell = inventory.layout().cell_size();
    let mut ui = InventoryUI::new(Vec2::new(40.0, 40.0));
    ui.open();

    let clicks = [
        (Vec2::new(0.5, 0.5), PointerButton::Secondary),
        (Vec2::new(2.5, 0.5), PointerButton::Primary),
        (Vec2::new(1.5, 0.5), PointerButton::Primary),
        (Vec2::new(0.5, 0.5), PointerButton::Primary),
    ];
    for (cell_position, button) in clicks {
        let screen = ui.position() + cell_position * cell;
        let hit = ui.handle_click(&mut inventory, screen, button);
        log::info!("{:?} click at {} -> {}", button, screen, if hit { "slot" } else { "miss" });
    }
    log_inventory(&inventory);

    let mut renderer = UIRenderer::new();
    ui.render(&mut renderer, &inventory, Vec2::ZERO);
    log::info!("Frame has {} UI elements", renderer.elements().len());

    ui.close(&mut inventory);
    log::info!("After closing:");
    log_inventory(&inventory);

    let pathfinder = Pathfinder::from_config(&config.pathfinding);
    if pathfinder.is_available() {
        let mut grid = PassabilityGrid::open(8, 8)?;
        for y in 0..6 {
            grid.set(IVec2::new(4, y), BLOCKED);
        }
        let path = pathfinder.search(&grid, IVec2::new(0, 0), IVec2::new(7, 0))?;
        log::info!("Path of {} cells: {:?}", path.len(), path);
    } else {
        log::info!("Skipping pathfinding, native library not loaded");
    }

    Ok(())
}
