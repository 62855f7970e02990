use matchbook::{OrderBook, Side, TimeInForce};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut book = OrderBook::new("DEMO");

    book.add_limit_order(1, 100, 100, Side::Buy, TimeInForce::GoodTillCancel)?;
    book.add_limit_order(2, 101, 100, Side::Sell, TimeInForce::GoodTillCancel)?;
    book.add_limit_order(3, 100, 100, Side::Buy, TimeInForce::GoodTillCancel)?;

    println!("Size: {}", book.len()); // 3

    book.cancel_order(1);
    println!("Size: {}", book.len()); // 2

    println!("Best bid: {:?}", book.best_bid());
    println!("Best ask: {:?}", book.best_ask());
    println!("Spread: {:?}", book.spread());

    let snapshot = book.level_infos();
    println!("Snapshot: {}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
