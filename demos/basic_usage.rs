// ============================================================================
// Basic Usage Example
// ============================================================================

use exact_money::prelude::*;
use exact_money::numeric::{Integer, Rational};
use exact_money::scale::{eur, xau};

fn main() {
    println!("=== exact-money Example ===\n");

    // Split 10 EUR three ways without losing a fraction of a cent.
    let pot: Dense<Eur> = Dense::from_integer(Integer::from(10));
    let third = pot
        .div_scalar(&Rational::new(Integer::from(3), Integer::one()).unwrap())
        .unwrap();
    println!("One third of {} is exactly {}", pot, third);

    // Emit whole cents; the unrepresentable fraction is carried forward.
    let (cents, carry) = trunc(eur::CENT, &third).unwrap();
    println!("Payable now: {}", cents);
    println!("Carried for the next settlement: {}", carry);

    // The parts always recompose the original exactly.
    let recomposed = Dense::from_discrete(&cents).unwrap() + carry;
    assert_eq!(recomposed, third);
    println!("Recomposed: {} (exact)\n", recomposed.simplify());

    // Non-decimal subdivisions work the same way: grams of gold.
    let vault: Dense<Xau> = Dense::from_integer(Integer::from(2)); // 2 troy ounces
    let (grams, dust) = floor(xau::GRAM, &vault).unwrap();
    println!("{} holds {} plus {}", vault, grams, dust.simplify());

    // Every registered unit of a currency is enumerable.
    println!("\nRegistered XAU units:");
    for (unit, scale) in registered_units::<Xau>() {
        println!("  {:<12} {}", unit, scale);
    }
}
