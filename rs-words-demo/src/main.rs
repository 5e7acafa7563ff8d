use rs_words_core::Engine;

fn main() {
    // The engine starts empty and learns from every sentence it is given
    let engine = Engine::new();

    let conversation = [
        "The quick brown fox jumps over the lazy dog.",
        "The quick reply surprised everyone.",
        "A lazy afternoon with a quick nap.",
        "The dog barked at the fox!",
    ];

    // Each sentence updates frequencies, completions, transitions and co-occurrences at once
    for sentence in conversation {
        let words = engine.ingest(sentence);
        println!("Ingested {} words from {:?}", words, sentence);
    }

    // Empty input is ignored
    assert_eq!(engine.ingest("   "), 0);

    // Three most frequent words; ties keep the order in which words first appeared
    for (word, count) in engine.top_words(3) {
        println!("top: {} ({})", word, count);
    }

    // Completions are ranked by frequency, then alphabetically
    println!("completions of 'qu': {:?}", engine.completions("qu"));
    println!("completions of 'LA': {:?}", engine.completions("LA"));

    // The successor seen most often after a word
    match engine.predict_next("quick") {
        Some(next) => println!("after 'quick' comes '{}'", next),
        None => println!("no prediction after 'quick'"),
    }
    println!("successors of 'the': {:?}", engine.predict_top("the", 3));

    // Unknown words simply have no prediction
    assert_eq!(engine.predict_next("unicorn"), None);

    // Words sharing the most sentences with 'fox'
    println!("related to 'fox': {:?}", engine.related("fox", 5));

    println!("{:?}", engine.stats());
}
