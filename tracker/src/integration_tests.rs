//! End-to-end tests for the bakery tracker
//!
//! These drive the tracker the way the front end does: intent in,
//! snapshot out through the view.
//!
//! Run with: cargo test integration_tests

#[cfg(test)]
mod tests {
    use crate::app::intent_parser::Intent;
    use crate::app::{parse_intent, Outcome};
    use crate::domain::entities::{CakeId, Order, OrderId};
    use crate::test_utils::{test_tracker, TestTracker};

    fn send(tracker: &mut TestTracker, line: &str) -> Outcome {
        let intent = parse_intent(line).unwrap();
        tracker.handle(intent).unwrap()
    }

    fn latest(tracker: &TestTracker) -> Vec<Order> {
        tracker.state().view().last().unwrap().to_vec()
    }

    fn all_ids(orders: &[Order]) -> Vec<u64> {
        let mut ids = Vec::new();
        for order in orders {
            ids.push(order.id.0);
            ids.extend(order.cakes.iter().map(|c| c.id.0));
        }
        ids
    }

    /// Create, add a cake, delete the cake, delete the order
    #[test]
    fn wedding_order_lifecycle() {
        let mut tracker = test_tracker();
        tracker.start();

        send(&mut tracker, "create-order Wedding Ana 2024-05-01");
        let snapshot = latest(&tracker);
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot[0].cakes.is_empty());
        let order_id = snapshot[0].id;

        send(
            &mut tracker,
            &format!("add-cake {} Vanilla Buttercream 2 Round", order_id),
        );
        let snapshot = latest(&tracker);
        let cakes = &snapshot[0].cakes;
        assert_eq!(cakes.len(), 1);
        assert_eq!(cakes[0].flavor, "Vanilla");
        assert_eq!(cakes[0].frosting, "Buttercream");
        assert_eq!(cakes[0].layers, "2");
        assert_eq!(cakes[0].shape.as_deref(), Some("Round"));
        assert_ne!(cakes[0].id.0, order_id.0);
        let cake_id = cakes[0].id;

        send(
            &mut tracker,
            &format!("delete-cake {} {}", order_id, cake_id),
        );
        assert!(latest(&tracker)[0].cakes.is_empty());

        send(&mut tracker, &format!("delete-order {}", order_id));
        assert!(latest(&tracker).is_empty());
        assert!(tracker.service().list_all().is_empty());

        // initial + four mutations
        assert_eq!(tracker.state().view().refreshes().len(), 5);
    }

    /// Deleting the first of two orders leaves the second untouched at index 0
    #[test]
    fn delete_first_of_two_orders() {
        let mut tracker = test_tracker();
        send(&mut tracker, "create-order First Ana Monday");
        send(&mut tracker, "create-order Second \"Bo Chen\" Tuesday");
        let second = latest(&tracker)[1].clone();

        send(&mut tracker, "delete-order 0");

        let snapshot = latest(&tracker);
        assert_eq!(snapshot, vec![second]);
        assert_eq!(snapshot[0].name, "Second");
        assert_eq!(snapshot[0].baker, "Bo Chen");
        assert_eq!(snapshot[0].delivery_date, "Tuesday");
    }

    #[test]
    fn identifiers_are_unique_and_increasing() {
        let mut tracker = test_tracker();
        send(&mut tracker, "create-order A Ana D1");
        send(&mut tracker, "add-cake 0 a b 1");
        send(&mut tracker, "create-order B Ana D2");
        send(&mut tracker, "add-cake 2 c d 1");
        send(&mut tracker, "add-cake 0 e f 1");
        send(&mut tracker, "create-order C Ana D3");

        let mut issued = all_ids(&latest(&tracker));
        issued.sort_unstable();
        assert_eq!(issued, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn ids_are_not_reused_after_deletes() {
        let mut tracker = test_tracker();
        send(&mut tracker, "create-order A Ana D1");
        send(&mut tracker, "add-cake 0 a b 1");
        send(&mut tracker, "delete-order 0");
        send(&mut tracker, "create-order B Ana D2");
        send(&mut tracker, "add-cake 2 c d 1");

        let snapshot = latest(&tracker);
        assert_eq!(snapshot[0].id, OrderId(2));
        assert_eq!(snapshot[0].cakes[0].id, CakeId(3));
    }

    #[test]
    fn cakes_stay_with_their_order() {
        let mut tracker = test_tracker();
        send(&mut tracker, "create-order X Ana D1");
        send(&mut tracker, "create-order Y Ana D2");
        send(&mut tracker, "add-cake 1 ForY f 1");
        send(&mut tracker, "add-cake 0 ForX f 1");
        send(&mut tracker, "add-cake 1 AlsoY f 1");

        let snapshot = latest(&tracker);
        let flavors = |o: &Order| o.cakes.iter().map(|c| c.flavor.clone()).collect::<Vec<_>>();
        assert_eq!(flavors(&snapshot[0]), vec!["ForX"]);
        assert_eq!(flavors(&snapshot[1]), vec!["ForY", "AlsoY"]);
    }

    #[test]
    fn absent_order_delete_keeps_store_but_republishes() {
        let mut tracker = test_tracker();
        send(&mut tracker, "create-order A Ana D1");
        send(&mut tracker, "create-order B Ana D2");
        let before = latest(&tracker);

        let outcome = send(&mut tracker, "delete-order 42");

        assert_eq!(outcome, Outcome::Published);
        assert_eq!(latest(&tracker), before);
        assert_eq!(tracker.state().view().refreshes().len(), 3);
    }

    #[test]
    fn every_mutation_publishes_once_reflecting_only_that_mutation() {
        let mut tracker = test_tracker();
        tracker.start();
        let script = [
            "create-order A Ana D1",
            "add-cake 0 a b 1",
            "create-order B Ana D2",
            "delete-cake 0 1",
            "delete-order 0",
        ];
        let expected_counts = [(1, 0), (1, 1), (2, 1), (2, 0), (1, 0)];

        for (i, line) in script.iter().enumerate() {
            send(&mut tracker, line);
            let refreshes = tracker.state().view().refreshes();
            assert_eq!(refreshes.len(), i + 2, "after {}", line);

            let snapshot = refreshes.last().unwrap();
            let cakes: usize = snapshot.iter().map(|o| o.cakes.len()).sum();
            assert_eq!((snapshot.len(), cakes), expected_counts[i], "after {}", line);
        }
    }

    #[test]
    fn failed_intent_publishes_nothing() {
        let mut tracker = test_tracker();
        tracker.start();

        let result = tracker.handle(Intent::AddCake {
            order_id: OrderId(9),
            flavor: "Vanilla".to_string(),
            frosting: "Buttercream".to_string(),
            layers: "2".to_string(),
            shape: None,
        });

        assert!(result.is_err());
        assert_eq!(tracker.state().view().refreshes().len(), 1);
    }
}
