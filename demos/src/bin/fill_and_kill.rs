use matchbook::{OrderBook, Side, TimeInForce};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut book = OrderBook::new("DEMO");

    // a small ask ladder
    book.add_limit_order(1, 100, 10, Side::Sell, TimeInForce::GoodTillCancel)?;
    book.add_limit_order(2, 101, 10, Side::Sell, TimeInForce::GoodTillCancel)?;
    book.add_limit_order(3, 103, 10, Side::Sell, TimeInForce::GoodTillCancel)?;

    // buys up to 101: fills 20, the remaining 30 is discarded
    let trades = book.add_limit_order(4, 101, 50, Side::Buy, TimeInForce::FillAndKill)?;

    for trade in &trades {
        println!(
            "Trade: bid {} at {} / ask {} at {} for {}",
            trade.bid.order_id,
            trade.bid.price,
            trade.ask.order_id,
            trade.ask.price,
            trade.quantity()
        );
    }

    println!("Order 4 resting: {:?}", book.get_order(4)); // None
    println!("Size: {}", book.len()); // 1, the ask at 103
    println!("Best ask: {:?}", book.best_ask());

    // an unmatchable fill-and-kill is rejected outright
    let trades = book.add_limit_order(5, 90, 10, Side::Buy, TimeInForce::FillAndKill)?;
    println!("Trades from unmatchable order: {}", trades.len()); // 0
    println!("Size: {}", book.len()); // still 1

    Ok(())
}
