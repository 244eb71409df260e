use criterion::{black_box, criterion_group, criterion_main, Criterion};
use basis_scan::core::{
    calculate_spread, generate_pairs, normalize_symbol, scan_spreads, MarketKind, PriceStore,
    SymbolMap, VenueId,
};

const VENUES: [&str; 4] = ["binance", "bybit", "okx", "gate"];

fn make_symbol_map(symbols: usize) -> SymbolMap {
    let listed: Vec<_> = (0..symbols)
        .map(|i| normalize_symbol(&format!("COIN{}/USDT", i)))
        .collect();

    let mut map = SymbolMap::new();
    for venue in VENUES {
        let markets = map.entry(VenueId::new(venue)).or_default();
        markets.insert(MarketKind::Spot, listed.clone());
        markets.insert(MarketKind::Futures, listed.clone());
    }
    map
}

fn make_store(map: &SymbolMap) -> PriceStore {
    let mut store = PriceStore::new();
    for (i, (venue, markets)) in map.iter().enumerate() {
        for (kind, symbols) in markets {
            let base = 100.0 + i as f64 * 0.5;
            for symbol in symbols {
                store.update(venue.clone(), *kind, symbol.clone(), base - 0.01, base, 1);
            }
        }
    }
    store
}

fn bench_generate_pairs(c: &mut Criterion) {
    c.bench_function("generate_pairs_500_symbols", |b| {
        let map = make_symbol_map(500);

        b.iter(|| {
            black_box(generate_pairs(black_box(&map)));
        });
    });
}

fn bench_scan_spreads(c: &mut Criterion) {
    c.bench_function("scan_spreads_500_symbols", |b| {
        let map = make_symbol_map(500);
        let pairs = generate_pairs(&map);
        let store = make_store(&map);

        b.iter(|| {
            black_box(scan_spreads(black_box(&store), black_box(&pairs), 0.5));
        });
    });
}

fn bench_calculate_spread(c: &mut Criterion) {
    c.bench_function("calculate_spread", |b| {
        b.iter(|| {
            black_box(calculate_spread(black_box(42000.0), black_box(42150.0)));
        });
    });
}

criterion_group!(
    benches,
    bench_generate_pairs,
    bench_scan_spreads,
    bench_calculate_spread
);
criterion_main!(benches);
