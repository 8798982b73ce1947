mod client;

use client::App;

fn main() {
    dioxus::launch(App);
}
