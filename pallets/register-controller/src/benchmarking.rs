//! Benchmarking setup for pallet-register-controller

use super::*;

#[allow(unused)]
use crate::Pallet as RegisterController;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn fingerprint<T: Config>(byte: u8) -> T::Hash {
    let mut hash = T::Hash::default();
    hash.as_mut().fill(byte);
    hash
}

fn setup_owner<T: Config>() -> T::AccountId {
    let caller: T::AccountId = whitelisted_caller();
    Owner::<T>::put(&caller);
    caller
}

fn setup_deployed<T: Config>() -> T::AccountId {
    let caller = setup_owner::<T>();
    Deployed::<T>::put(true);
    caller
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn create_ledger() {
        let caller = setup_owner::<T>();

        #[extrinsic_call]
        _(
            RawOrigin::Signed(caller),
            b"Benchmark Register".to_vec(),
            b"BMR".to_vec(),
        );

        assert!(Deployed::<T>::get());
    }

    #[benchmark]
    fn whitelist() {
        let caller = setup_deployed::<T>();
        let holder: T::AccountId = account("holder", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), holder.clone(), b"benchmark-identity-record".to_vec());

        assert!(pallet_share_register::Fingerprints::<T>::contains_key(&holder));
    }

    #[benchmark]
    fn remove_whitelist() {
        let caller = setup_deployed::<T>();
        let holder: T::AccountId = account("holder", 0, 0);
        pallet_share_register::Fingerprints::<T>::insert(&holder, fingerprint::<T>(0xAA));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), holder.clone());

        assert!(!pallet_share_register::Fingerprints::<T>::contains_key(&holder));
    }

    #[benchmark]
    fn update_whitelist() {
        let caller = setup_deployed::<T>();
        let holder: T::AccountId = account("holder", 0, 0);
        pallet_share_register::Fingerprints::<T>::insert(&holder, fingerprint::<T>(0xAA));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), holder.clone(), b"updated-identity-record".to_vec());

        assert!(pallet_share_register::Fingerprints::<T>::contains_key(&holder));
    }

    #[benchmark]
    fn issue() {
        let caller = setup_deployed::<T>();
        let holder: T::AccountId = account("holder", 0, 0);
        pallet_share_register::Fingerprints::<T>::insert(&holder, fingerprint::<T>(0xAA));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), holder.clone(), 1_000_000u128);

        assert_eq!(pallet_share_register::Balances::<T>::get(&holder), 1_000_000);
    }

    #[benchmark]
    fn burn() {
        let caller = setup_deployed::<T>();
        let holder: T::AccountId = account("holder", 0, 0);
        pallet_share_register::Fingerprints::<T>::insert(&holder, fingerprint::<T>(0xAA));
        pallet_share_register::Pallet::<T>::do_issue(holder.clone(), 10_000_000)
            .expect("issue succeeds");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), holder.clone(), 1_000_000u128);

        assert_eq!(pallet_share_register::Balances::<T>::get(&holder), 9_000_000);
    }

    #[benchmark]
    fn freeze() {
        let caller = setup_deployed::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(pallet_share_register::Frozen::<T>::get());
    }

    #[benchmark]
    fn lock() {
        let caller = setup_deployed::<T>();
        let holder: T::AccountId = account("holder", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), holder.clone());

        assert!(pallet_share_register::Locked::<T>::get(&holder));
    }

    #[benchmark]
    fn master_transfer() {
        let caller = setup_deployed::<T>();
        let original: T::AccountId = account("original", 0, 0);
        let replacement: T::AccountId = account("replacement", 0, 0);
        pallet_share_register::Fingerprints::<T>::insert(&original, fingerprint::<T>(0xAA));
        pallet_share_register::Fingerprints::<T>::insert(&replacement, fingerprint::<T>(0xBB));
        pallet_share_register::Pallet::<T>::do_issue(original.clone(), 1_000_000)
            .expect("issue succeeds");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), original.clone(), replacement.clone());

        assert_eq!(pallet_share_register::Balances::<T>::get(&replacement), 1_000_000);
    }

    #[benchmark]
    fn migrate_record() {
        let caller = setup_deployed::<T>();
        let holder: T::AccountId = account("holder", 0, 0);

        #[extrinsic_call]
        _(
            RawOrigin::Signed(caller),
            holder.clone(),
            b"legacy-holder-record".to_vec(),
            250_000u128,
        );

        assert_eq!(pallet_share_register::Balances::<T>::get(&holder), 250_000);
    }

    #[benchmark]
    fn finish_migration() {
        let caller = setup_deployed::<T>();
        let new_owner: T::AccountId = account("admin", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), Some(new_owner.clone()));

        assert!(Migrated::<T>::get());
        assert_eq!(Owner::<T>::get(), Some(new_owner));
    }

    #[benchmark]
    fn close_for_migration() {
        let caller = setup_deployed::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(Closed::<T>::get());
        assert!(pallet_share_register::Closed::<T>::get());
    }

    impl_benchmark_test_suite!(
        RegisterController,
        crate::mock::new_test_ext(),
        crate::mock::Test
    );
}
