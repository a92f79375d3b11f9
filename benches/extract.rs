// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use runlah_races::config::consts::{BASE_URL, PROVINCE};
use runlah_races::specs::calendar::{parse_doc, CalendarSpec};

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Roughly the shape of a real calendar page: chrome, then many cards.
fn synthetic_page(cards: usize) -> String {
    let mut doc = String::from(
        r#"<!DOCTYPE html><html><head><script>window.__x = "<a>";</script></head><body>
           <nav><a href="/en/calendar">Calendar</a><a href="/en/results">Results</a></nav>"#,
    );
    for i in 0..cards {
        let month = MONTHS[i % 12];
        let day = i % 28 + 1;
        let date = if i % 3 == 0 {
            format!("{day}-{} {month} 2026", day + 1)
        } else {
            format!("{month} {day}, 2026")
        };
        doc.push_str(&format!(
            r#"<div class="col"><a href="/en/event_{i}"><div class="card">
                 <img class="banner" src="/images/event/{i}.jpg" alt="banner">
                 <h5 class="title">Race number {i} &amp; friends</h5>
                 <p>{date}</p><p>Mueang, Chiang Mai province</p>
                 <span>Detail</span></div></a></div>"#
        ));
    }
    doc.push_str("</body></html>");
    doc
}

fn bench_extract(c: &mut Criterion) {
    let spec = CalendarSpec::new(BASE_URL, PROVINCE).expect("base url");
    let doc = synthetic_page(500);

    c.bench_function("calendar_parse_500_cards", |b| {
        b.iter(|| {
            let races = parse_doc(black_box(&doc), &spec);
            black_box(races.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
