struct Restaurant {
    name: String,
    cuisine: String,
}

impl Restaurant {
    fn new(name: &str, cuisine: &str) -> Self {
        Self {
            name: name.to_string(),
            cuisine: cuisine.to_string(),
        }
    }

    fn describe(&self) -> String {
        format!("In {}, flavor offered: {}", self.name, self.cuisine)
    }

    fn open(&self) -> String {
        format!("{} is now open!", self.name)
    }
}

fn main() {
    let restaurant = Restaurant::new("Hobbes' Bar", "wine and English foods");
    println!("{}", restaurant.describe());
    println!("{}", restaurant.open());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines() {
        let restaurant = Restaurant::new("Hobbes' Bar", "wine and English foods");
        assert_eq!(
            restaurant.describe(),
            "In Hobbes' Bar, flavor offered: wine and English foods"
        );
        assert_eq!(restaurant.open(), "Hobbes' Bar is now open!");
    }
}
