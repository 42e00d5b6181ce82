#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bikeshare::data::read_trips;
use bikeshare::models::{City, TripTable};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Ten Monday trips: six in January, four in March. Has Gender and Birth Year.
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-02 08:10:00,2017-01-02 08:20:00,600,Clark St,Lake St,Subscriber,Male,1990.0
1,2017-01-02 08:30:00,2017-01-02 08:35:00,300,Lake St,Clark St,Subscriber,Female,1985.0
2,2017-01-09 17:05:00,2017-01-09 17:12:00,420,Clark St,Lake St,Customer,,
3,2017-01-16 08:45:00,2017-01-16 08:51:00,360,State St,Clark St,Subscriber,Male,1990.0
4,2017-01-23 12:00:00,2017-01-23 12:15:00,900,Lake St,State St,Customer,,
5,2017-01-30 08:15:00,2017-01-30 08:19:00,240,Clark St,Lake St,Subscriber,Female,2000.0
6,2017-03-06 17:20:00,2017-03-06 17:28:20,500,State St,Lake St,Subscriber,Male,1975.0
7,2017-03-13 17:40:00,2017-03-13 17:51:40,700,Lake St,Clark St,Customer,,
8,2017-03-20 09:00:00,2017-03-20 09:03:20,200,State St,Clark St,Subscriber,Male,1990.0
9,2017-03-27 18:30:00,2017-03-27 18:31:40,100,Clark St,State St,Subscriber,Female,1992.0
";

/// Three June weekend trips, no Gender and no Birth Year columns.
pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-06-03 10:00:00,2017-06-03 10:01:00,60,A St,B St,Subscriber
1,2017-06-04 11:00:00,2017-06-04 11:02:00,120,B St,A St,Customer
2,2017-06-04 11:30:00,2017-06-04 11:33:00,180,A St,B St,Subscriber
";

pub fn bikeshare() -> Command {
    cargo_bin_cmd!("bikeshare")
}

/// Fresh, empty directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("bikeshare_test_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

pub fn write_city(dir: &Path, city: City, content: &str) -> PathBuf {
    let path = dir.join(city.file_name());
    fs::write(&path, content).expect("write city fixture");
    path
}

/// Data dir holding the Chicago and Washington fixtures
pub fn fixture_dir(name: &str) -> PathBuf {
    let dir = temp_dir(name);
    write_city(&dir, City::Chicago, CHICAGO_CSV);
    write_city(&dir, City::Washington, WASHINGTON_CSV);
    dir
}

/// A config path that does not exist, so the user's own config is never read
pub fn no_config(dir: &Path) -> String {
    dir.join("absent.yaml").to_string_lossy().to_string()
}

pub fn load_fixture(name: &str, content: &str) -> TripTable {
    let dir = temp_dir(name);
    let path = write_city(&dir, City::Chicago, content);
    read_trips(&path).expect("load fixture")
}

pub fn render<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
{
    let mut buf = Vec::new();
    f(&mut buf).expect("render");
    String::from_utf8(buf).expect("utf8 output")
}
