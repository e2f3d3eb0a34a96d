const ART: &str = r"
 ___ ____ _____ __     __   ____
|_ _|  _ \_   _|\ \   / /  / ___|  ___ _ __ __ _ _ __   ___ _ __
 | || |_) || |   \ \ / /   \___ \ / __| '__/ _` | '_ \ / _ \ '__|
 | ||  __/ | |    \ V /     ___) | (__| | | (_| | |_) |  __/ |
|___|_|    |_|     \_/     |____/ \___|_|  \__,_| .__/ \___|_|
                                                |_|
";

pub fn print_banner() {
    println!("{ART}");
    println!("📺 iptv-scraper v{}", iptv_scraper::VERSION);
}
