/// `qsm` usage example
use qsm::{ActionSet, construct_url_params, get_url_params, qsm, resolve_url_params};

fn main() {
    let url = "https://www.google.cz/search?q=hello+world&num=20";

    // Parse the query string
    let params = get_url_params(url);
    for param in &params {
        println!("  {} = {}", param.key, param.value_str());
    }
    println!();

    // Next page
    let next = qsm(url, &ActionSet::new().set("num", 40));
    println!("Next page: {next:?}"); // ...?q=hello+world&num=40

    // Toggle the image filter on, then off again
    let images = ActionSet::new().toggle("tbm", "isch");
    let on = qsm(url, &images).unwrap_or_default();
    let off = qsm(&on, &images).unwrap_or_default();
    println!("Images on:  {on}"); // ...&num=20&tbm=isch
    println!("Images off: {off}"); // ...&num=20
    println!();

    // Several values for one key
    let many = ActionSet::new().set_many("num", [20, 40, 60]).remove("q");
    println!("Query only: {}", construct_url_params(&resolve_url_params(&params, &many)));
}
