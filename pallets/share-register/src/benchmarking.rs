//! Benchmarking setup for pallet-share-register

use super::*;

#[allow(unused)]
use crate::Pallet as ShareRegister;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn fingerprint<T: Config>(byte: u8) -> T::Hash {
    let mut hash = T::Hash::default();
    hash.as_mut().fill(byte);
    hash
}

fn verify_account<T: Config>(account: &T::AccountId, byte: u8) {
    Fingerprints::<T>::insert(account, fingerprint::<T>(byte));
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn create() {
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, b"Benchmark Register".to_vec(), b"BMR".to_vec());

        assert!(Created::<T>::get());
    }

    #[benchmark]
    fn add_verified() {
        let holder: T::AccountId = account("holder", 0, 0);
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, holder.clone(), fingerprint::<T>(0xAA));

        assert!(Fingerprints::<T>::contains_key(&holder));
    }

    #[benchmark]
    fn remove_verified() {
        let holder: T::AccountId = account("holder", 0, 0);
        verify_account::<T>(&holder, 0xAA);
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, holder.clone());

        assert!(!Fingerprints::<T>::contains_key(&holder));
    }

    #[benchmark]
    fn update_verified() {
        let holder: T::AccountId = account("holder", 0, 0);
        verify_account::<T>(&holder, 0xAA);
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, holder.clone(), fingerprint::<T>(0xBB));

        assert_eq!(Fingerprints::<T>::get(&holder), Some(fingerprint::<T>(0xBB)));
    }

    #[benchmark]
    fn issue() {
        let holder: T::AccountId = account("holder", 0, 0);
        verify_account::<T>(&holder, 0xAA);
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, holder.clone(), 1_000_000u128);

        assert_eq!(Balances::<T>::get(&holder), 1_000_000);
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        verify_account::<T>(&caller, 0xAA);
        verify_account::<T>(&recipient, 0xBB);
        Balances::<T>::insert(&caller, 10_000_000u128);
        TotalSupply::<T>::put(10_000_000u128);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), 1_000_000u128);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 1_000_000u128);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 1_000_000);
    }

    #[benchmark]
    fn transfer_from() {
        let owner: T::AccountId = account("owner", 0, 0);
        let spender: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        verify_account::<T>(&owner, 0xAA);
        verify_account::<T>(&recipient, 0xBB);
        Balances::<T>::insert(&owner, 10_000_000u128);
        TotalSupply::<T>::put(10_000_000u128);
        Allowances::<T>::insert(&owner, &spender, 5_000_000u128);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), recipient.clone(), 1_000_000u128);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
    }

    #[benchmark]
    fn burn() {
        let holder: T::AccountId = account("holder", 0, 0);
        verify_account::<T>(&holder, 0xAA);
        Balances::<T>::insert(&holder, 10_000_000u128);
        TotalSupply::<T>::put(10_000_000u128);
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, holder.clone(), 1_000_000u128);

        assert_eq!(Balances::<T>::get(&holder), 9_000_000);
    }

    #[benchmark]
    fn cancel_and_reissue() {
        let original: T::AccountId = account("original", 0, 0);
        let replacement: T::AccountId = account("replacement", 0, 0);
        verify_account::<T>(&original, 0xAA);
        verify_account::<T>(&replacement, 0xBB);
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");
        ShareRegister::<T>::do_issue(original.clone(), 1_000_000).expect("issue succeeds");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, original.clone(), replacement.clone());

        assert_eq!(Balances::<T>::get(&replacement), 1_000_000);
        assert!(SupersededBy::<T>::contains_key(&original));
    }

    #[benchmark]
    fn toggle_freeze() {
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin);

        assert!(Frozen::<T>::get());
    }

    #[benchmark]
    fn toggle_lock() {
        let holder: T::AccountId = account("holder", 0, 0);
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, holder.clone());

        assert!(Locked::<T>::get(&holder));
    }

    #[benchmark]
    fn close() {
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin);

        assert!(Closed::<T>::get());
    }

    impl_benchmark_test_suite!(ShareRegister, crate::mock::new_uncreated_ext(), crate::mock::Test);
}
